use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

use crate::api::body::JsonBody;
use crate::api::format::user_view;
use crate::api::response::{ApiResponse, ApiResult};
use crate::app::AppState;
use crate::auth::AuthError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub auth_token: String,
}

/// POST /api/auth/login - exchange username/password for a bearer token
pub async fn login(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<TokenResponse> {
    let credential = |name: &str| body.get(name).and_then(Value::as_str);
    let (Some(username), Some(password)) = (credential("username"), credential("password")) else {
        tracing::debug!("Login rejected: missing credentials");
        return Err(AuthError::InvalidCredentials.into());
    };

    let Some(user) = state.users.authenticate(username, password).await? else {
        tracing::info!("Login rejected for '{}'", username);
        return Err(AuthError::InvalidCredentials.into());
    };

    let auth_token = state.tokens.issue(&user_view(user))?;
    tracing::info!("Issued token for '{}'", username);
    Ok(ApiResponse::ok(TokenResponse { auth_token }))
}
