use crate::commands::{CmdMessage, CmdResult};
use crate::model::Product;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Quantity,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "quantity" => Ok(SortKey::Quantity),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Price => write!(f, "price"),
            SortKey::Quantity => write!(f, "quantity"),
        }
    }
}

/// Sorts in place, ascending and stable. An unrecognized criterion leaves the order alone.
pub fn run(products: &mut [Product], criterion: &str) -> CmdResult {
    let mut result = CmdResult::default();

    let Ok(key) = criterion.parse::<SortKey>() else {
        result.add_message(CmdMessage::info(format!(
            "Unknown sort criterion '{}', order unchanged.",
            criterion.trim()
        )));
        return result;
    };

    match key {
        SortKey::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Quantity => products.sort_by_key(|p| p.quantity),
    }

    result.add_message(CmdMessage::success(format!("Products sorted by {}.", key)));
    result
}
