//! Named language variables.
//!
//! # Data Flow
//! ```text
//! [[select_lang]] entries
//!     → registry.rs (normalize names, compile GroupConfig per entry)
//!     → LanguageVariables (immutable, shared via ArcSwap)
//!
//! Per request:
//!     cookie + Accept-Language
//!     → LanguageVariables::select_all
//!     → SelectedLanguages (request extension)
//! ```
//!
//! # Design Decisions
//! - A leading `$` is optional; omitting it only warns
//! - Redefining a variable is an error
//! - All entry errors are collected; any error rejects the whole table

pub mod registry;

pub use registry::{LanguageVariable, LanguageVariables, SelectedLanguages, VariableError};
