//! Authentication
//!
//! JWT session tokens and the per-request identity context:
//! - [`JwtService`]: token generation and validation
//! - [`require_auth`]: middleware that guards the `/admin` surface
//! - [`CurrentUser`]: the authenticated employee, injected per request

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
