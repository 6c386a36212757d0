//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed path params.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::parse_id;
pub use validated::ValidatedJson;
