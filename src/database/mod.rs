pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use manager::DatabaseManager;
pub use memory::{MemoryArticleStore, MemoryUserStore};
pub use models::{Article, ArticleChanges, NewArticle, NewUser, User};
pub use postgres::{PgArticleStore, PgUserStore};

/// Errors surfaced by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Persistence operations for articles.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// All articles in creation order.
    async fn list(&self) -> Result<Vec<Article>, StoreError>;

    async fn find(&self, id: Uuid) -> Result<Option<Article>, StoreError>;

    async fn insert(&self, article: NewArticle) -> Result<Article, StoreError>;

    /// Returns `None` when no article has this id.
    async fn update(&self, id: Uuid, changes: ArticleChanges) -> Result<Option<Article>, StoreError>;

    /// Returns whether a record was removed.
    async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Must fail with `StoreError::UsernameTaken` atomically when the username exists.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
}
