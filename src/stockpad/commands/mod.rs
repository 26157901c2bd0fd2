//! # Command Layer
//!
//! Business logic for every catalog operation. Commands take the catalog (or a store) as a
//! plain Rust argument and return [`CmdResult`]. They never print and never read input;
//! anything that needs the user, like delete confirmation, is passed in by the caller.

use crate::error::{Result, StockError};
use crate::model::{Product, Scope};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod filter;
pub mod helpers;
pub mod init;
pub mod list;
pub mod load;
pub mod save;
pub mod search;
pub mod sort;
pub mod update;

#[derive(Debug, Clone)]
pub struct StockPaths {
    pub local: PathBuf,
    pub global: Option<PathBuf>,
}

impl StockPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Local => Ok(self.local.clone()),
            Scope::Global => self
                .global
                .clone()
                .ok_or_else(|| StockError::Store("Global scope is not available".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
