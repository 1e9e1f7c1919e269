use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored user row. Never serialized to clients directly; see `api::format::user_view`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub favorites: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Validated, hashed signup ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}
