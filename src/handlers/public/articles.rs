use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::body::JsonBody;
use crate::api::format::{article_view, ArticleView};
use crate::api::response::{ApiResponse, ApiResult};
use crate::app::AppState;
use crate::database::{ArticleChanges, NewArticle};
use crate::error::ApiError;

/// Keys a POST body must carry, checked in this order.
const REQUIRED_FIELDS: [&str; 6] = ["category", "featured", "title", "caption", "blogEntry", "image"];

#[derive(Debug, Serialize)]
pub struct ArticleList {
    pub articles: Vec<ArticleView>,
}

/// GET /articles
pub async fn list(State(state): State<AppState>) -> ApiResult<ArticleList> {
    let articles = state.articles.list_all().await?;
    Ok(ApiResponse::ok(ArticleList {
        articles: articles.into_iter().map(article_view).collect(),
    }))
}

/// GET /articles/:id
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<ArticleView> {
    let article = state.articles.get_by_id(&id).await?;
    Ok(ApiResponse::ok(article_view(article)))
}

/// POST /articles
pub async fn create(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<ArticleView> {
    let body = body.into_object();
    if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !body.contains_key(**f)) {
        let message = format!("Missing `{}` in request body", field);
        tracing::warn!("{}", message);
        return Err(ApiError::bad_request(message));
    }

    let new_article: NewArticle = serde_json::from_value(Value::Object(body))
        .map_err(|e| ApiError::bad_request(format!("Invalid article: {}", e)))?;

    let article = state.articles.create(new_article).await?;
    Ok(ApiResponse::created(article_view(article)))
}

/// PUT /articles/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> ApiResult<ArticleView> {
    let body = body.into_object();
    let body_id = body.get("id").map(id_text);
    if body_id.as_deref() != Some(id.as_str()) {
        let message = format!(
            "Request path id ({}) and request body id ({}) must match",
            id,
            body_id.as_deref().unwrap_or("undefined")
        );
        tracing::warn!("{}", message);
        return Err(ApiError::bad_request(message));
    }

    let changes = changes_from_body(&body)?;
    let article = state.articles.update(&id, changes).await?;
    Ok(ApiResponse::accepted(article_view(article)))
}

/// DELETE /articles/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.articles.delete_by_id(&id).await?;
    Ok(ApiResponse::no_content())
}

fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Only the updateable fields present in the body; everything else is ignored.
fn changes_from_body(body: &Map<String, Value>) -> Result<ArticleChanges, ApiError> {
    let field = |name: &str| -> Result<Option<String>, ApiError> {
        match body.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ApiError::bad_request(format!("`{}` must be a string", name))),
        }
    };

    Ok(ArticleChanges {
        category: field("category")?,
        featured: field("featured")?,
        title: field("title")?,
        caption: field("caption")?,
        blog_entry: field("blogEntry")?,
        image: field("image")?,
    })
}
