//! Account Handlers
//!
//! Login, registration and email availability

use std::time::Duration;

use axum::{Json, extract::State};

use crate::api::extract::{ApiJson, ApiQuery};
use crate::auth::password::{hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::{RepoError, account};
use crate::security_log;
use crate::utils::{AppError, AppResult, ErrorCode, Validate};
use shared::client::{EmailExistsQuery, LoginRequest, RegisterRequest, UserDto};

/// Fixed delay before answering a login, so unknown accounts and wrong
/// passwords take the same time
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/account/login
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<Json<UserDto>> {
    req.validate()?;
    let email = req.email.trim().to_string();

    let account = account::find_by_email(state.pool(), &email).await?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // unified error for unknown email and wrong password
    let account = match account {
        Some(a) => {
            let hash = a.password_hash.clone();
            let password = req.password;
            let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
                .await
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
            if !valid {
                security_log!("WARN", "login_failed", email = email.clone(), reason = "invalid_password");
                return Err(AppError::invalid_credentials());
            }
            a
        }
        None => {
            security_log!("WARN", "login_failed", email = email.clone(), reason = "unknown_account");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(account.id, &account.email)?;

    tracing::info!(account_id = account.id, email = %account.email, "User logged in");

    Ok(Json(UserDto {
        email: account.email,
        token,
    }))
}

/// POST /api/account/register
pub async fn register(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> AppResult<Json<UserDto>> {
    req.validate()?;
    let email = req.email.trim().to_string();

    if account::exists(state.pool(), &email).await? {
        return Err(AppError::new(ErrorCode::EmailAlreadyInUse).with_detail("email", email));
    }

    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let account = match account::create(state.pool(), &email, &password_hash).await {
        Ok(a) => a,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::new(ErrorCode::EmailAlreadyInUse).with_detail("email", email));
        }
        Err(e) => return Err(e.into()),
    };

    let token = state
        .get_jwt_service()
        .generate_token(account.id, &account.email)?;

    security_log!("INFO", "account_registered", account_id = account.id, email = account.email.clone());

    Ok(Json(UserDto {
        email: account.email,
        token,
    }))
}

/// GET /api/account/emailexists?email=
pub async fn email_exists(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<EmailExistsQuery>,
) -> AppResult<Json<bool>> {
    let exists = account::exists(state.pool(), query.email.trim()).await?;
    Ok(Json(exists))
}
