//! JWT-based authentication gate for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use inkpanel_core::error::CoreError;
use inkpanel_core::types::UserId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Handlers take this as their first extractor after `State`, so an
/// unauthenticated request is rejected before its path or body is looked at
/// and before any store access:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authentication provider's user id (from `claims.sub`).
    pub user_id: UserId,
}

/// Resolve the caller's identity from request headers.
///
/// Fails with [`CoreError::Unauthorized`] when the header is missing,
/// malformed, or carries an invalid or expired token.
pub fn require_user(headers: &HeaderMap, jwt: &JwtConfig) -> Result<AuthUser, CoreError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        CoreError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".into())
    })?;

    let claims = validate_token(token, jwt)
        .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;

    if claims.sub.is_empty() {
        return Err(CoreError::Unauthorized("Token has no subject".into()));
    }

    Ok(AuthUser {
        user_id: claims.sub,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(require_user(&parts.headers, &state.config.jwt)?)
    }
}
