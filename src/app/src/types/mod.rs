//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - auth: Credentials and wire payloads of the authentication API
//! - error: Failures surfaced by the authentication API
//! - session: Displayed session state

pub mod auth;
pub mod error;
pub mod session;

pub use auth::*;
pub use error::*;
pub use session::*;
