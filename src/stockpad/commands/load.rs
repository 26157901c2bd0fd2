use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Reads the catalog from `store`. Skipped lines become a single warning.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let report = store.load()?;
    let mut result = CmdResult::default();

    if !report.skipped.is_empty() {
        let lines: Vec<String> = report
            .skipped
            .iter()
            .map(|s| s.line_number.to_string())
            .collect();
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed line(s) in {} (line {})",
            report.skipped.len(),
            store.location(),
            lines.join(", ")
        )));
    }

    Ok(result.with_listed_products(report.products))
}
