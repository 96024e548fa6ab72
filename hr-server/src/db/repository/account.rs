//! Account Repository

use super::{RepoError, RepoResult};
use shared::models::Account;
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(
        "SELECT id, email, password_hash, created_at FROM account WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(account)
}

pub async fn exists(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM account WHERE email = ?")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

/// Insert a new account. A taken email surfaces as [`RepoError::Duplicate`].
pub async fn create(pool: &SqlitePool, email: &str, password_hash: &str) -> RepoResult<Account> {
    let account = sqlx::query_as::<_, Account>(
        "INSERT INTO account (email, password_hash, created_at) VALUES (?, ?, ?) \
         RETURNING id, email, password_hash, created_at",
    )
    .bind(email)
    .bind(password_hash)
    .bind(now_millis())
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!("Account {email} already exists")),
        other => other,
    })?;
    Ok(account)
}
