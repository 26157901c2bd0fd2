//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate reaches persisted data.
//! A store moves the *whole* catalog at once: [`DataStore::load`] reads every line and
//! [`DataStore::save`] rewrites every line. There is no partial loading and no append.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one delimited text file
//! - [`memory::InMemoryStore`]: keeps the serialized text in memory for tests
//!
//! Both go through the same text codec ([`parse_catalog`] / [`render_catalog`]) so tests
//! against the in-memory store exercise the real file format.
//!
//! ## Storage Format
//!
//! ```text
//! id,name,category,price,quantity
//! 1,Widget,Hardware,9.99,100
//! 2,Gadget,Electronics,19.95,50
//! ```
//!
//! The first line is always the header. It is discarded on load without inspection and
//! rewritten on save.

use crate::error::Result;
use crate::model::{Product, CATALOG_HEADER};

pub mod fs;
pub mod memory;

/// A storage line that could not be turned into a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the source text (the header is line 1)
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// Result of reading a catalog: the products that parsed, in file order, and the lines
/// that did not.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedLine>,
}

/// Abstract interface for catalog persistence.
pub trait DataStore {
    /// Read the whole catalog. A store with nothing persisted yet returns an empty report.
    fn load(&self) -> Result<LoadReport>;

    /// Replace the persisted catalog with `products`, in order.
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}

/// Parses catalog text. Malformed lines are collected, never fatal.
pub fn parse_catalog(text: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match Product::from_line(line) {
            Ok(product) => report.products.push(product),
            Err(e) => {
                tracing::warn!(line_number = idx + 1, line, "skipping malformed line: {}", e);
                report.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    line: line.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

/// Renders the header plus one line per product.
pub fn render_catalog(products: &[Product]) -> String {
    let mut out = String::with_capacity(CATALOG_HEADER.len() + 1 + products.len() * 32);
    out.push_str(CATALOG_HEADER);
    out.push('\n');
    for product in products {
        out.push_str(&product.to_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_garbage_lines_and_keeps_the_rest() {
        let text = "id,name,category,price,quantity\n1,A,Cat,5.0,10\ngarbage-line\n2,B,Cat,7.5,3\n";
        let report = parse_catalog(text);

        let ids: Vec<u32> = report.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_number, 3);
        assert_eq!(report.skipped[0].line, "garbage-line");
    }

    #[test]
    fn discards_first_line_whatever_it_contains() {
        let report = parse_catalog("1,Looks,Like,1.0,1\n2,Real,Row,2.0,2\n");
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.products[0].id, 2);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn ignores_blank_lines() {
        let report = parse_catalog("header\n\n   \n1,A,,1.0,1\n\n");
        assert_eq!(report.products.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn empty_text_yields_empty_catalog() {
        assert_eq!(parse_catalog(""), LoadReport::default());
    }

    #[test]
    fn renders_header_then_rows_in_order() {
        let products = vec![
            Product::new(2, "B".into(), "".into(), 2.5, 1).unwrap(),
            Product::new(1, "A".into(), "X".into(), 1.0, 3).unwrap(),
        ];
        assert_eq!(
            render_catalog(&products),
            "id,name,category,price,quantity\n2,B,,2.5,1\n1,A,X,1,3\n"
        );
    }
}
