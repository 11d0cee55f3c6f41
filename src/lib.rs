//! Cookie- and `Accept-Language`-driven language selection.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod negotiation;
pub mod observability;
pub mod variables;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use negotiation::{AliasGroup, GroupConfig, GroupError, HeaderScanner, Selection, Source};
pub use variables::LanguageVariables;
