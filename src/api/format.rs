//! Projections from stored records to the shapes exposed over HTTP.
//!
//! Storage rows carry columns (password hashes, snake_case names) that never
//! leave the process; everything a client sees goes through these functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::{Article, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: Uuid,
    pub category: String,
    pub featured: Option<String>,
    pub title: String,
    pub caption: String,
    pub blog_entry: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub favorites: Vec<Uuid>,
}

pub fn article_view(article: Article) -> ArticleView {
    ArticleView {
        id: article.id,
        category: article.category,
        featured: article.featured,
        title: article.title,
        caption: article.caption,
        blog_entry: article.blog_entry,
        image: article.image,
        created_at: article.created_at,
    }
}

pub fn user_view(user: User) -> UserView {
    UserView {
        id: user.id,
        username: user.username,
        first_name: user.first_name,
        last_name: user.last_name,
        favorites: user.favorites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn article_view_uses_api_field_names() {
        let article = Article {
            id: Uuid::nil(),
            category: "Travel_Abroad".to_string(),
            featured: None,
            title: "Backpacking".to_string(),
            caption: "c".to_string(),
            blog_entry: "b".to_string(),
            image: "http://x".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(article_view(article)).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["blogEntry", "caption", "category", "createdAt", "featured", "id", "image", "title"]
        );
        assert_eq!(obj["featured"], json!(null));
    }

    #[test]
    fn user_view_never_carries_password() {
        let user = User {
            id: Uuid::new_v4(),
            username: "DealHunter".to_string(),
            password_hash: "$2b$04$secret".to_string(),
            first_name: "Jane".to_string(),
            last_name: "McDonald".to_string(),
            favorites: vec![],
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(user_view(user)).unwrap();
        let text = value.to_string();

        assert!(!text.contains("password"));
        assert!(!text.contains("$2b$04$secret"));
        assert_eq!(value["firstName"], json!("Jane"));
        assert_eq!(value["favorites"], json!([]));
    }
}
