//! Language negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     "en:en-US", "fr:fr-FR", ...
//!     → group.rs (split into alias groups)
//!     → GroupConfig (validated, immutable)
//!
//! Per request:
//!     cookie value ──────────────→ matcher.rs ──→ canonical alias
//!         │ (no match)
//!         ▼
//!     Accept-Language → scanner.rs → matcher.rs ──→ canonical alias
//!         │ (no match)
//!         ▼
//!     first group's canonical alias (default)
//! ```
//!
//! # Design Decisions
//! - GroupConfig is immutable; reload builds a fresh one
//! - Matching is ASCII case-insensitive, exact length, first group wins
//! - Header order decides, quality values are skipped unparsed
//! - Resolution is total: there is always a default

pub mod group;
pub mod matcher;
pub mod resolver;
pub mod scanner;

pub use group::{AliasGroup, GroupConfig, GroupError};
pub use resolver::{Selection, Source};
pub use scanner::HeaderScanner;
