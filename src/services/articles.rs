use std::sync::Arc;

use crate::database::{Article, ArticleChanges, ArticleStore, NewArticle};

use super::{parse_id, ServiceError};

/// Article operations over whichever store backs the server.
#[derive(Clone)]
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
}

impl ArticleService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Article>, ServiceError> {
        Ok(self.store.list().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Article, ServiceError> {
        let id = parse_id(id).ok_or(ServiceError::NotFound("Article"))?;
        self.store
            .find(id)
            .await?
            .ok_or(ServiceError::NotFound("Article"))
    }

    pub async fn create(&self, article: NewArticle) -> Result<Article, ServiceError> {
        let required = [
            ("category", &article.category),
            ("title", &article.title),
            ("caption", &article.caption),
            ("blogEntry", &article.blog_entry),
            ("image", &article.image),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(ServiceError::MissingField(field));
        }

        let created = self.store.insert(article).await?;
        tracing::info!("Created article {}", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: &str, changes: ArticleChanges) -> Result<Article, ServiceError> {
        let required = [
            ("category", &changes.category),
            ("title", &changes.title),
            ("caption", &changes.caption),
            ("blogEntry", &changes.blog_entry),
            ("image", &changes.image),
        ];
        if let Some(&(field, _)) = required
            .iter()
            .find(|(_, value)| value.as_deref().is_some_and(str::is_empty))
        {
            return Err(ServiceError::EmptyField(field));
        }

        let id = parse_id(id).ok_or(ServiceError::NotFound("Article"))?;
        let updated = self
            .store
            .update(id, changes)
            .await?
            .ok_or(ServiceError::NotFound("Article"))?;
        tracing::info!("Updated article {}", updated.id);
        Ok(updated)
    }

    /// Absence after the call counts as success.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };
        if self.store.remove(id).await? {
            tracing::info!("Deleted article {}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryArticleStore;

    fn service() -> ArticleService {
        ArticleService::new(Arc::new(MemoryArticleStore::new()))
    }

    fn backpacking() -> NewArticle {
        NewArticle {
            category: "Travel_Abroad".to_string(),
            featured: Some("Featured".to_string()),
            title: "Backpacking".to_string(),
            caption: "c".to_string(),
            blog_entry: "b".to_string(),
            image: "http://x".to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_required_field() {
        let svc = service();
        let mut article = backpacking();
        article.caption.clear();

        let err = svc.create(article).await.unwrap_err();
        assert!(matches!(err, ServiceError::MissingField("caption")));
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn featured_is_optional() {
        let svc = service();
        let mut article = backpacking();
        article.featured = None;

        let created = svc.create(article).await.unwrap();
        assert_eq!(created.featured, None);
    }

    #[tokio::test]
    async fn get_by_malformed_or_unknown_id_is_not_found() {
        let svc = service();
        assert!(matches!(svc.get_by_id("not-an-id").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            svc.get_by_id(&uuid::Uuid::new_v4().to_string()).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_rejects_emptying_required_field() {
        let svc = service();
        let created = svc.create(backpacking()).await.unwrap();
        let changes = ArticleChanges {
            title: Some(String::new()),
            ..Default::default()
        };

        let err = svc.update(&created.id.to_string(), changes).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyField("title")));
        assert_eq!(svc.get_by_id(&created.id.to_string()).await.unwrap().title, "Backpacking");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let id = svc.create(backpacking()).await.unwrap().id.to_string();

        svc.delete_by_id(&id).await.unwrap();
        svc.delete_by_id(&id).await.unwrap();
        svc.delete_by_id("garbage").await.unwrap();
        assert!(matches!(svc.get_by_id(&id).await, Err(ServiceError::NotFound(_))));
    }
}
