// handlers/protected/mod.rs - routes behind the bearer-token middleware.
// Handlers here can rely on an `AuthUser` request extension.
pub mod auth;
pub mod content;
