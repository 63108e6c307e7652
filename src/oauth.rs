//! Three-legged OAuth helpers: scopes, authorize URLs, and token payloads.
//!
//! The authorize URL is built without I/O; the code-for-token exchange itself runs
//! through [`OrcidClient::exchange_code`](crate::client::OrcidClient::exchange_code).

pub mod authorize;
pub mod scope;
pub mod token;

pub use authorize::*;
pub use scope::*;
pub use token::*;
