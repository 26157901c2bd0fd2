use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Product;

use super::helpers::position_of;

/// Replaces the quantity of the product with `id`. A missing id is reported, not raised.
pub fn run(products: &mut [Product], id: u32, quantity: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let idx = match position_of(products, id) {
        Ok(idx) => idx,
        Err(e @ StockError::ProductNotFound(_)) => {
            result.add_message(CmdMessage::warning(e.to_string()));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let product = &mut products[idx];
    let previous = product.quantity;
    product.quantity = quantity;

    result.add_message(CmdMessage::success(format!(
        "Stock updated for {}: {} -> {}",
        product.name, previous, quantity
    )));
    Ok(result.with_affected_products(vec![product.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn replaces_only_the_quantity() {
        let mut products = CatalogFixture::standard().build();
        let before = products[1].clone();

        run(&mut products, 2, 7).unwrap();

        assert_eq!(products[1].quantity, 7);
        assert_eq!(products[1].name, before.name);
        assert_eq!(products[1].price, before.price);
        assert_eq!(products[1].category, before.category);
    }

    #[test]
    fn unknown_id_is_a_warning_without_mutation() {
        let mut products = CatalogFixture::standard().build();
        let before = products.clone();

        let result = run(&mut products, 99, 1).unwrap();

        assert_eq!(products, before);
        assert!(result.affected_products.is_empty());
        assert!(result.has_level(MessageLevel::Warning));
    }
}
