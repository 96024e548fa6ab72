//! Authentication middleware
//!
//! Applied as a route layer on the protected routers only, so every request
//! reaching it must carry a bearer token.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::HeaderMap;

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Validate `Authorization: Bearer <token>` and resolve the caller.
///
/// | Failure | Error code |
/// |---------|------------|
/// | no Authorization header | `NotAuthenticated` |
/// | expired token | `TokenExpired` |
/// | anything else | `TokenInvalid` |
pub(crate) fn authenticate(
    headers: &HeaderMap,
    uri: &http::Uri,
    jwt_service: &JwtService,
) -> Result<CurrentUser, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = uri.to_string());
            return Err(AppError::unauthorized());
        }
    };

    let result = jwt_service
        .validate_token(token)
        .and_then(CurrentUser::try_from);

    result.map_err(|e| {
        security_log!(
            "WARN",
            "auth_failed",
            error = e.to_string(),
            uri = uri.to_string()
        );
        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })
}

/// Require a valid token; injects [`CurrentUser`] into request extensions.
///
/// CORS preflight requests pass through untouched.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let user = authenticate(req.headers(), req.uri(), state.get_jwt_service())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
