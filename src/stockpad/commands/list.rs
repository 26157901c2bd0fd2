use crate::commands::{CmdMessage, CmdResult};
use crate::model::Product;

pub fn run(products: &[Product]) -> CmdResult {
    let mut result = CmdResult::default().with_listed_products(products.to_vec());
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products in inventory."));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn lists_in_catalog_order() {
        let products = CatalogFixture::standard().build();
        let result = run(&products);
        assert_eq!(result.listed_products, products);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_says_so() {
        let result = run(&[]);
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
