//! CurrentUser extractor
//!
//! Reuses the user injected by [`require_auth`](super::require_auth) and
//! falls back to validating the header itself.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::auth::middleware::authenticate;
use crate::core::ServerState;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = authenticate(&parts.headers, &parts.uri, state.get_jwt_service())?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
