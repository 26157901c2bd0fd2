//! # API Facade
//!
//! [`StockApi`] is the single entry point for a session. It owns the store and the
//! in-memory catalog, and forwards each call to the matching command in `commands/`.
//!
//! The catalog lives here between calls: [`StockApi::load`] replaces it with what the store
//! holds, mutations change it in place, and nothing reaches the store until
//! [`StockApi::save`]. Queries hand back copies and leave it untouched.
//!
//! Like the commands it wraps, the API never touches stdout, stderr or stdin.

use crate::commands;
use crate::error::Result;
use crate::model::{Product, Scope};
use crate::store::DataStore;

pub struct StockApi<S: DataStore> {
    store: S,
    paths: commands::StockPaths,
    products: Vec<Product>,
}

impl<S: DataStore> StockApi<S> {
    /// Creates an API with an empty catalog. Call [`StockApi::load`] to read the store.
    pub fn new(store: S, paths: commands::StockPaths) -> Self {
        Self {
            store,
            paths,
            products: Vec::new(),
        }
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let mut result = commands::load::run(&self.store)?;
        self.products = std::mem::take(&mut result.listed_products);
        Ok(result)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.products)
    }

    pub fn add_product(&mut self, new: NewProduct) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.products, new)
    }

    pub fn update_quantity(&mut self, id: u32, quantity: u32) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.products, id, quantity)
    }

    pub fn delete_product<F>(&mut self, id: u32, confirm: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&Product) -> Result<bool>,
    {
        commands::delete::run(&mut self.products, id, confirm)
    }

    pub fn search(&self, keyword: &str) -> commands::CmdResult {
        commands::search::run(&self.products, keyword)
    }

    pub fn sort(&mut self, criterion: &str) -> commands::CmdResult {
        commands::sort::run(&mut self.products, criterion)
    }

    pub fn filter_by_price(&self, min: f64, max: f64) -> commands::CmdResult {
        commands::filter::run(&self.products, min, max)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::add::NewProduct;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::sort::SortKey;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    const SEEDED: &str =
        "id,name,category,price,quantity\n1,Widget,Hardware,9.99,100\n2,Gadget,Electronics,19.95,50\n";

    fn api_with(content: &str) -> StockApi<InMemoryStore> {
        let paths = StockPaths {
            local: PathBuf::from("data"),
            global: None,
        };
        let mut api = StockApi::new(InMemoryStore::with_content(content), paths);
        api.load().unwrap();
        api
    }

    #[test]
    fn load_fills_the_session_catalog() {
        let api = api_with(SEEDED);
        assert_eq!(api.products().len(), 2);
        assert_eq!(api.find(2).unwrap().name, "Gadget");
        assert!(api.find(3).is_none());
    }

    #[test]
    fn mutations_stay_in_memory_until_save() {
        let mut api = api_with(SEEDED);
        api.add_product(NewProduct::new("Sprocket", "Hardware", 4.5, 10))
            .unwrap();
        api.update_quantity(1, 3).unwrap();

        assert_eq!(api.store().save_count(), 0);
        assert_eq!(api.store().content(), Some(SEEDED));

        api.save().unwrap();
        let reloaded = api.store().load().unwrap();
        assert_eq!(reloaded.products, api.products());
        assert_eq!(reloaded.products[2].id, 3);
        assert_eq!(reloaded.products[0].quantity, 3);
    }

    #[test]
    fn added_products_reload_exactly_as_accepted() {
        let mut api = api_with(SEEDED);
        assert!(api
            .add_product(NewProduct::new("Nut\nBolt", "Hardware", 0.5, 20))
            .is_err());
        api.add_product(NewProduct::new(" Washer ", " Tools", 0.1, 500))
            .unwrap();

        api.save().unwrap();
        let reloaded = api.store().load().unwrap();
        assert!(reloaded.skipped.is_empty());
        assert_eq!(reloaded.products, api.products());
        assert_eq!(reloaded.products[2].name, "Washer");
    }

    #[test]
    fn sort_reorders_catalog_but_queries_do_not() {
        let mut api = api_with(SEEDED);
        let found = api.search("GAD");
        assert_eq!(found.listed_products.len(), 1);

        let ranged = api.filter_by_price(0.0, 10.0);
        assert_eq!(ranged.listed_products.len(), 1);
        assert_eq!(api.products()[0].id, 1);

        api.sort("quantity");
        assert_eq!(api.products()[0].id, 2);
    }

    #[test]
    fn declined_delete_is_a_no_op() {
        let mut api = api_with(SEEDED);
        let before = api.products().to_vec();
        api.delete_product(2, |_| Ok(false)).unwrap();
        assert_eq!(api.products(), before.as_slice());
    }
}
