use crate::error::{Result, StockError};
use std::fmt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Header written as the first line of every catalog file.
pub const CATALOG_HEADER: &str = "id,name,category,price,quantity";

pub const DEFAULT_CURRENCY: &str = "Rp";

const FIELD_COUNT: usize = 5;
const NAME_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// `./data` next to where the tool is run
    Local,
    /// Per-user data directory
    Global,
}

/// One inventory item.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Validates and builds a product. `name` and `category` are stored trimmed, the same way
    /// they come back from the catalog file.
    pub fn new(id: u32, name: String, category: String, price: f64, quantity: u32) -> Result<Self> {
        if id == 0 {
            return Err(StockError::Validation("id must be positive".into()));
        }
        let name = storable_text("name", &name)?;
        if name.is_empty() {
            return Err(StockError::Validation("name cannot be empty".into()));
        }
        let category = storable_text("category", &category)?;
        if !price.is_finite() || price < 0.0 {
            return Err(StockError::Validation(format!(
                "price must be a non-negative number, got {}",
                price
            )));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
            quantity,
        })
    }

    /// Serializes to `id,name,category,price,quantity`.
    ///
    /// Commas inside `name` or `category` are written as-is; the file format has no escaping.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.name, self.category, self.price, self.quantity
        )
    }

    /// Parses one catalog line.
    ///
    /// The line is split positionally into at most five parts, so any extra comma ends up in
    /// the trailing `quantity` part and fails there.
    pub fn from_line(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.splitn(FIELD_COUNT, ',').map(str::trim).collect();
        if parts.len() != FIELD_COUNT {
            return Err(StockError::format(
                line,
                format!("expected {} fields, found {}", FIELD_COUNT, parts.len()),
            ));
        }

        let id: u32 = parts[0]
            .parse()
            .map_err(|_| StockError::format(line, format!("invalid id '{}'", parts[0])))?;
        let price: f64 = parts[3]
            .parse()
            .map_err(|_| StockError::format(line, format!("invalid price '{}'", parts[3])))?;
        let quantity: u32 = parts[4]
            .parse()
            .map_err(|_| StockError::format(line, format!("invalid quantity '{}'", parts[4])))?;

        Self::new(
            id,
            parts[1].to_string(),
            parts[2].to_string(),
            price,
            quantity,
        )
    }

    /// Single-line presentation used by list views.
    pub fn display_line(&self, currency: &str) -> String {
        format!(
            "ID: {} | {} | {} | {} {:.2} | Qty: {}",
            self.id,
            fit_to_width(&self.name, NAME_WIDTH),
            fit_to_width(&self.category, CATEGORY_WIDTH),
            currency,
            self.price,
            self.quantity
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line(DEFAULT_CURRENCY))
    }
}

/// One catalog line per product, so text fields cannot span lines.
fn storable_text(field: &str, value: &str) -> Result<String> {
    if value.contains(['\n', '\r']) {
        return Err(StockError::Validation(format!(
            "{} cannot contain line breaks",
            field
        )));
    }
    Ok(value.trim().to_string())
}

/// Pads or truncates `s` so it occupies exactly `width` terminal columns.
fn fit_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        let padding = width - s.width();
        return format!("{}{}", s, " ".repeat(padding));
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    current_width += 1;

    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}
