pub mod auth;
pub mod cors;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use cors::{cors_layer, preflight_no_content};
