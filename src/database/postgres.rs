use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{Article, ArticleChanges, NewArticle, NewUser, User};
use super::{ArticleStore, StoreError, UserStore};

const ARTICLE_COLUMNS: &str = "id, category, featured, title, caption, blog_entry, image, created_at";
const USER_COLUMNS: &str = "id, username, password_hash, first_name, last_name, favorites, created_at";

pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        let sql = format!("SELECT {} FROM articles ORDER BY created_at, id", ARTICLE_COLUMNS);
        let rows = sqlx::query_as::<_, Article>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Article>, StoreError> {
        let sql = format!("SELECT {} FROM articles WHERE id = $1", ARTICLE_COLUMNS);
        let row = sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, article: NewArticle) -> Result<Article, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO articles (id, category, featured, title, caption, blog_entry, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        );
        let row = sqlx::query_as::<_, Article>(&sql)
            .bind(Uuid::new_v4())
            .bind(&article.category)
            .bind(&article.featured)
            .bind(&article.title)
            .bind(&article.caption)
            .bind(&article.blog_entry)
            .bind(&article.image)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: ArticleChanges) -> Result<Option<Article>, StoreError> {
        let sql = format!(
            r#"
            UPDATE articles SET
                category = COALESCE($2, category),
                featured = COALESCE($3, featured),
                title = COALESCE($4, title),
                caption = COALESCE($5, caption),
                blog_entry = COALESCE($6, blog_entry),
                image = COALESCE($7, image)
            WHERE id = $1
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        );
        let row = sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .bind(&changes.category)
            .bind(&changes.featured)
            .bind(&changes.title)
            .bind(&changes.caption)
            .bind(&changes.blog_entry)
            .bind(&changes.image)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let sql = format!("SELECT {} FROM users ORDER BY created_at, id", USER_COLUMNS);
        let rows = sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO users (id, username, password_hash, first_name, last_name, favorites, created_at)
            VALUES ($1, $2, $3, $4, $5, '{{}}', $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let result = sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(row) => Ok(row),
            // Unique constraint on users.username
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::UsernameTaken(user.username))
            }
            Err(other) => Err(other.into()),
        }
    }
}
