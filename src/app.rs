use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::auth::{AuthError, TokenService};
use crate::config::AppConfig;
use crate::database::{ArticleStore, DatabaseManager, UserStore};
use crate::error::ApiError;
use crate::handlers::{protected, public};
use crate::middleware::{cors_layer, jwt_auth_middleware, preflight_no_content};
use crate::services::{ArticleService, UserService};

/// Everything a request handler may touch, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub articles: ArticleService,
    pub users: UserService,
    pub tokens: Arc<TokenService>,
    article_store: Arc<dyn ArticleStore>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        article_store: Arc<dyn ArticleStore>,
        user_store: Arc<dyn UserStore>,
    ) -> Result<Self, AuthError> {
        let tokens = TokenService::new(&config.security.jwt_secret, config.jwt_expiry())?;
        Ok(Self {
            articles: ArticleService::new(article_store.clone()),
            users: UserService::new(user_store, config.security.bcrypt_cost),
            tokens: Arc::new(tokens),
            config: Arc::new(config),
            article_store,
        })
    }

    pub fn from_database(config: AppConfig, database: &DatabaseManager) -> Result<Self, AuthError> {
        Self::new(config, database.articles(), database.users())
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(article_routes())
        .merge(user_routes())
        .merge(protected_routes(state.clone()))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(preflight_no_content))
                .layer(cors_layer()),
        )
        .with_state(state)
}

fn article_routes() -> Router<AppState> {
    use public::articles;

    Router::new()
        .route("/articles", get(articles::list).post(articles::create))
        .route(
            "/articles/:id",
            get(articles::show)
                .put(articles::update)
                .delete(articles::delete),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(public::users::list).post(public::users::create))
        .route("/api/auth/login", post(public::auth::login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/refresh", post(protected::auth::refresh))
        .route("/api/protected", get(protected::content::protected_get))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.article_store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiError::service_unavailable("database unavailable").into_response()
        }
    }
}
