use axum::Extension;
use serde_json::{json, Value};

use crate::api::response::{ApiResponse, ApiResult};
use crate::middleware::AuthUser;

/// GET /api/protected
pub async fn protected_get(Extension(auth_user): Extension<AuthUser>) -> ApiResult<Value> {
    tracing::debug!("Protected content served to '{}'", auth_user.username);
    Ok(ApiResponse::ok(json!({ "data": "blogDetails" })))
}
