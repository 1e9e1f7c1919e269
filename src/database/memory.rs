use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Article, ArticleChanges, NewArticle, NewUser, User};
use super::{ArticleStore, StoreError, UserStore};

/// Process-local article store, used when no database is configured and in tests.
#[derive(Default)]
pub struct MemoryArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.articles.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Article>, StoreError> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, article: NewArticle) -> Result<Article, StoreError> {
        let record = Article {
            id: Uuid::new_v4(),
            category: article.category,
            featured: article.featured,
            title: article.title,
            caption: article.caption,
            blog_entry: article.blog_entry,
            image: article.image,
            created_at: Utc::now(),
        };
        self.articles.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, changes: ArticleChanges) -> Result<Option<Article>, StoreError> {
        let mut articles = self.articles.write().await;
        match articles.iter_mut().find(|a| a.id == id) {
            Some(article) => {
                changes.apply_to(article);
                Ok(Some(article.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut articles = self.articles.write().await;
        let before = articles.len();
        articles.retain(|a| a.id != id);
        Ok(articles.len() != before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Process-local user store. Uniqueness is checked under the write lock.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UsernameTaken(user.username));
        }
        let record = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            favorites: Vec::new(),
            created_at: Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }
}
