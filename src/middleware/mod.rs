pub mod auth;
pub mod gate;

pub use auth::{extract_token, resolve_context, RequestContext};
pub use gate::{authorize, require_admin, AdminSession};
