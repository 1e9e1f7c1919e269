use axum::{extract::State, Extension};

use crate::api::response::{ApiResponse, ApiResult};
use crate::app::AppState;
use crate::handlers::public::auth::TokenResponse;
use crate::middleware::AuthUser;

/// POST /api/auth/refresh - trade a still-valid token for one with a fresh expiry
pub async fn refresh(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<TokenResponse> {
    let auth_token = state.tokens.issue(&auth_user.claims.user)?;
    tracing::debug!("Refreshed token for '{}'", auth_user.username);
    Ok(ApiResponse::ok(TokenResponse { auth_token }))
}
