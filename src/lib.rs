//! Relic - dig TODO comments out of a source tree
//!
//! A CLI tool that scans a directory for `TODO` line comments, parses
//! each into structured fields (user, date, importance, text) and lets
//! the user filter, sort and display them as a table in an interactive
//! session.
//!
//! # Features
//!
//! - Quote-aware extraction: markers inside string literals are skipped
//! - Structured `user; date; text` comment bodies with an importance
//!   score derived from `!` marks
//! - Lenient date normalization into `YYYY[-MM[-DD]]`
//! - Interactive `show` / `important` / `user` / `date` / `sort` queries
//! - JSON dump of the scanned collection as an alternative output
//!
//! # Example
//!
//! ```rust,no_run
//! use relic::{query, scanner, table};
//! use std::path::Path;
//!
//! let comments = scanner::scan_directory(Path::new("."), "js").unwrap();
//! let command = query::parse_command("sort importance").unwrap();
//! print!("{}", table::render(&query::apply(&command, &comments)));
//! ```

pub mod cli;
pub mod models;
pub mod parser;
pub mod query;
pub mod scanner;
pub mod session;
pub mod table;

// Re-export commonly used types
pub use models::Comment;
pub use query::{Command, CommandError, SortKey};
pub use table::TableLayout;
