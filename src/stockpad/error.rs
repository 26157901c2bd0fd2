use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Malformed line '{line}': {reason}")]
    Format { line: String, reason: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StockError {
    pub fn format(line: &str, reason: impl Into<String>) -> Self {
        StockError::Format {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
