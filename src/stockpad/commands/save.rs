use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, products: &[Product]) -> Result<CmdResult> {
    store.save(products)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} product(s) to {}",
        products.len(),
        store.location()
    )));
    Ok(result)
}
