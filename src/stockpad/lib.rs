//! # Stockpad Architecture
//!
//! Stockpad is a small inventory manager: a flat list of products kept in one delimited text
//! file, loaded into memory for a session and written back on demand. The library holds all
//! of the record logic; the `stockpad` binary is a thin client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive menu              │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session catalog and the store                   │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, update, delete, search, sort, filter, load, save    │
//! │  - Plain Rust arguments in, `CmdResult` out                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, whole-catalog load/save                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never reads the terminal and never exits the
//! process. Anything that needs a person, such as confirming a delete, is handed in by the
//! caller as a closure. Non-fatal problems (a malformed line in the catalog file) are
//! reported as `tracing` events and as messages in the returned `CmdResult`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, file format codec and implementations
//! - [`model`]: The `Product` record and its line format
//! - [`config`]: Per-data-directory configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
