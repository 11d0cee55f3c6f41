//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, compiles alias groups)
//!     → AppConfig (validated, immutable)
//!
//! On reload signal:
//!     watcher.rs detects change (or SIGHUP)
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server recompiles variables and swaps them atomically
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields except `select_lang` have defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, read_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::SelectLangConfig;
