use std::sync::Arc;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::DatabaseConfig;

use super::{ArticleStore, MemoryArticleStore, MemoryUserStore, PgArticleStore, PgUserStore, StoreError, UserStore};

/// Owns the persistence backend for the lifetime of the server.
pub struct DatabaseManager {
    pool: Option<PgPool>,
    articles: Arc<dyn ArticleStore>,
    users: Arc<dyn UserStore>,
}

impl DatabaseManager {
    /// Connect to Postgres and apply migrations, or fall back to the in-memory store.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let Some(url) = config.url.as_deref() else {
            tracing::warn!("DATABASE_URL not set; using the in-memory store, data will not survive a restart");
            return Ok(Self::in_memory());
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;
        info!("Connected database pool (max {} connections)", config.max_connections);

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            articles: Arc::new(PgArticleStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool.clone())),
            pool: Some(pool),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            pool: None,
            articles: Arc::new(MemoryArticleStore::new()),
            users: Arc::new(MemoryUserStore::new()),
        }
    }

    pub fn articles(&self) -> Arc<dyn ArticleStore> {
        self.articles.clone()
    }

    pub fn users(&self) -> Arc<dyn UserStore> {
        self.users.clone()
    }

    pub fn is_persistent(&self) -> bool {
        self.pool.is_some()
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("Closed database pool");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn falls_back_to_memory_without_url() {
        let config = DatabaseConfig {
            url: None,
            max_connections: 1,
            connection_timeout: 1,
        };
        let manager = DatabaseManager::connect(&config).await.unwrap();
        assert!(!manager.is_persistent());
        assert!(manager.articles().ping().await.is_ok());
    }
}
