// handlers/public/mod.rs - endpoints that do not require a bearer token:
// article CRUD, user signup/listing and login (token acquisition).
pub mod articles;
pub mod auth;
pub mod users;
