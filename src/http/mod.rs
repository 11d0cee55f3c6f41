//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → middleware/select_lang.rs (cookie.rs + Accept-Language → variables)
//!     → handlers read SelectedLanguages from request extensions
//! ```

pub mod cookie;
pub mod middleware;
pub mod request;
pub mod server;

pub use cookie::{find_cookie, LANG_COOKIE};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
