use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

use super::helpers::{next_id, parse_price, parse_quantity};

/// Field values for a product that does not have an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    /// Builds from raw user input. Unparsable price or quantity is a validation error.
    pub fn parse(name: &str, category: &str, price: &str, quantity: &str) -> Result<Self> {
        Ok(Self::new(
            name.trim(),
            category.trim(),
            parse_price(price)?,
            parse_quantity(quantity)?,
        ))
    }
}

pub fn run(products: &mut Vec<Product>, new: NewProduct) -> Result<CmdResult> {
    let id = next_id(products)?;
    let product = Product::new(id, new.name, new.category, new.price, new.quantity)?;
    products.push(product.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added with ID {}: {}",
        id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
