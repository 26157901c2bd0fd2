use crate::error::{Result, StockError};
use crate::model::Product;

/// Position of the product with `id`, first match wins.
pub fn position_of(products: &[Product], id: u32) -> Result<usize> {
    products
        .iter()
        .position(|p| p.id == id)
        .ok_or(StockError::ProductNotFound(id))
}

/// `max(existing ids) + 1`, or 1 for an empty catalog.
pub fn next_id(products: &[Product]) -> Result<u32> {
    products
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| StockError::Validation("no ids left to assign".into()))
}

pub fn parse_price(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| StockError::Validation(format!("price must be a number, got '{}'", input)))
}

pub fn parse_quantity(input: &str) -> Result<u32> {
    input.trim().parse().map_err(|_| {
        StockError::Validation(format!(
            "quantity must be a whole number, got '{}'",
            input
        ))
    })
}

pub fn parse_id(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| StockError::Validation(format!("id must be a whole number, got '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_follows_the_max_not_the_count() {
        let products = CatalogFixture::new()
            .with(3, "A", 1.0, 1)
            .with(7, "B", 1.0, 1)
            .build();
        assert_eq!(next_id(&products).unwrap(), 8);
    }

    #[test]
    fn next_id_reports_exhaustion() {
        let products = CatalogFixture::new().with(u32::MAX, "A", 1.0, 1).build();
        assert!(matches!(next_id(&products), Err(StockError::Validation(_))));
    }

    #[test]
    fn position_of_reports_missing_ids() {
        let products = CatalogFixture::standard().build();
        assert_eq!(position_of(&products, 2).unwrap(), 1);
        assert!(matches!(
            position_of(&products, 42),
            Err(StockError::ProductNotFound(42))
        ));
    }

    #[test]
    fn numeric_inputs_are_trimmed_and_checked() {
        assert_eq!(parse_price(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_quantity("7\n").unwrap(), 7);
        assert!(parse_price("ten").is_err());
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_id("").is_err());
    }
}
