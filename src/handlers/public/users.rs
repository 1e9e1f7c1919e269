use axum::extract::State;

use crate::api::body::JsonBody;
use crate::api::format::{user_view, UserView};
use crate::api::response::{ApiResponse, ApiResult};
use crate::app::AppState;

/// POST /api/users - sign up
pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<UserView> {
    let user = state.users.register(&body).await?;
    Ok(ApiResponse::created(user_view(user)))
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<UserView>> {
    let users = state.users.list_all().await?;
    Ok(ApiResponse::ok(users.into_iter().map(user_view).collect()))
}
