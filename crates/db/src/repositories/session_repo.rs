//! Repository for the `sessions` table (refresh tokens, stored hashed).

use sqlx::PgPool;

use atrium_core::types::{DbId, Timestamp};

use crate::models::session::Session;

const COLUMNS: &str = "id, profile_id, token_hash, expires_at, revoked_at, created_at";

/// Provides operations for refresh-token sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Store a new session for a profile.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (profile_id, token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(profile_id)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Look up a session by its token hash.
    pub async fn find_by_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE token_hash = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a session by token hash. Returns `true` if a live session was
    /// revoked.
    pub async fn revoke(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = NOW()
             WHERE token_hash = $1 AND revoked_at IS NULL",
        )
        .bind(token_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
