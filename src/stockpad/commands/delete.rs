use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Product;

use super::helpers::position_of;

/// Removes the product with `id` once `confirm` agrees.
///
/// `confirm` is only called when the product exists. Returning `Ok(false)` cancels the
/// delete and leaves the catalog as it was.
pub fn run<F>(products: &mut Vec<Product>, id: u32, confirm: F) -> Result<CmdResult>
where
    F: FnOnce(&Product) -> Result<bool>,
{
    let mut result = CmdResult::default();

    let idx = match position_of(products, id) {
        Ok(idx) => idx,
        Err(e @ StockError::ProductNotFound(_)) => {
            result.add_message(CmdMessage::warning(e.to_string()));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    if !confirm(&products[idx])? {
        result.add_message(CmdMessage::info("Delete cancelled."));
        return Ok(result);
    }

    let removed = products.remove(idx);
    result.add_message(CmdMessage::success(format!(
        "Product deleted ({}): {}",
        removed.id, removed.name
    )));
    Ok(result.with_affected_products(vec![removed]))
}
