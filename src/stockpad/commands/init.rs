use crate::commands::{CmdMessage, CmdResult, StockPaths};
use crate::error::Result;
use crate::model::Scope;
use std::fs;

/// Ensures the data directory for `scope` exists.
pub fn run(paths: &StockPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut result = CmdResult::default();

    if dir.is_dir() {
        result.add_message(CmdMessage::info(format!(
            "Data directory already exists at {}",
            dir.display()
        )));
        return Ok(result);
    }

    fs::create_dir_all(&dir)?;
    tracing::debug!(dir = %dir.display(), "created data directory");
    result.add_message(CmdMessage::success(format!(
        "Created data directory at {}",
        dir.display()
    )));
    Ok(result)
}
