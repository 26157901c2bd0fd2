use crate::commands::CmdResult;
use crate::model::Product;

/// Products priced within `[min, max]`, both ends inclusive. `min > max` matches nothing.
pub fn run(products: &[Product], min: f64, max: f64) -> CmdResult {
    let matches = products
        .iter()
        .filter(|p| p.price >= min && p.price <= max)
        .cloned()
        .collect();

    CmdResult::default().with_listed_products(matches)
}
