//! Reads and changes `config.json` in the scope's data directory.
//!
//! Changing `file-name` only repoints the catalog. An existing catalog under the old name is
//! left where it is and the result carries a warning saying so.

use crate::commands::{CmdMessage, CmdResult, StockPaths};
use crate::config::{ConfigKey, StockConfig};
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Every key, or just the named one
    Show(Option<String>),
    Set(String, String),
}

pub fn run(paths: &StockPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = StockConfig::load(&dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::Show(None) => {
            for key in ConfigKey::ALL {
                result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key))));
            }
        }
        ConfigAction::Show(Some(raw)) => match raw.parse::<ConfigKey>() {
            Ok(key) => result.add_message(CmdMessage::info(config.get(key))),
            Err(e) => result.add_message(CmdMessage::error(e.to_string())),
        },
        ConfigAction::Set(raw, value) => {
            let key = match raw.parse::<ConfigKey>() {
                Ok(key) => key,
                Err(e) => {
                    result.add_message(CmdMessage::error(e.to_string()));
                    return Ok(result);
                }
            };

            let previous_catalog = config.catalog_path(&dir);
            if let Err(e) = config.set(key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(&dir)?;
            tracing::info!(%key, value = config.get(key), "config updated");

            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(key)
            )));

            let catalog = config.catalog_path(&dir);
            if key == ConfigKey::FileName
                && catalog != previous_catalog
                && previous_catalog.exists()
                && !catalog.exists()
            {
                result.add_message(CmdMessage::warning(format!(
                    "Existing catalog {} was not moved; {} starts empty",
                    previous_catalog.display(),
                    catalog.display()
                )));
            }
        }
    }

    Ok(result)
}
