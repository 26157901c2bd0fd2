use crate::commands::CmdResult;
use crate::model::Product;

/// Products whose name contains `keyword`, ignoring case. Catalog order is kept.
pub fn run(products: &[Product], keyword: &str) -> CmdResult {
    let keyword_lower = keyword.to_lowercase();

    let matches = products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&keyword_lower))
        .cloned()
        .collect();

    CmdResult::default().with_listed_products(matches)
}
