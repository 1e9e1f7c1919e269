use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Stored article row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Article {
    pub id: Uuid,
    pub category: String,
    pub featured: Option<String>,
    pub title: String,
    pub caption: String,
    pub blog_entry: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating an article. Id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub category: String,
    #[serde(default)]
    pub featured: Option<String>,
    pub title: String,
    pub caption: String,
    pub blog_entry: String,
    pub image: String,
}

/// Partial overwrite: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleChanges {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub blog_entry: Option<String>,
    pub image: Option<String>,
}

impl ArticleChanges {
    pub fn apply_to(self, article: &mut Article) {
        if let Some(v) = self.category {
            article.category = v;
        }
        if let Some(v) = self.featured {
            article.featured = Some(v);
        }
        if let Some(v) = self.title {
            article.title = v;
        }
        if let Some(v) = self.caption {
            article.caption = v;
        }
        if let Some(v) = self.blog_entry {
            article.blog_entry = v;
        }
        if let Some(v) = self.image {
            article.image = v;
        }
    }
}
