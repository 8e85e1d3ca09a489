//! # Mergington API
//!
//! HTTP interface over the activity registry.
//!
//! Handlers pull the activity name from the path and the email from the
//! query string, call into the shared [`ActivityRegistry`], and translate
//! the outcome:
//!
//! | Outcome                  | Status | Body                      |
//! |--------------------------|--------|---------------------------|
//! | success                  | 200    | `{"message": "..."}`      |
//! | unknown activity         | 404    | `{"detail": "..."}`       |
//! | duplicate / not enrolled | 400    | `{"detail": "..."}`       |
//!
//! [`ActivityRegistry`]: mergington_registry::ActivityRegistry

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::{create_router, RouterOptions};
pub use server::{ApiServer, ServerOptions};
pub use state::AppState;
