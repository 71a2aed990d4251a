//! Best-effort activity log writes.

use sqlx::PgPool;

use atrium_core::types::DbId;

use crate::models::activity::{ActivityEntry, NewActivity};

const COLUMNS: &str = "id, actor_id, entity_type, entity_id, action, detail, created_at";

/// Provides append/read operations for the activity log.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert an activity entry. Callers that do not want the failure to
    /// propagate use [`ActivityRepo::record_best_effort`].
    pub async fn insert(pool: &PgPool, entry: &NewActivity) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO activity_log (actor_id, entity_type, entity_id, action, detail)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(entry.actor_id)
        .bind(entry.entity_type)
        .bind(entry.entity_id)
        .bind(entry.action)
        .bind(&entry.detail)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Insert an activity entry, swallowing (but logging) any failure.
    /// The audit trail is advisory; a failed insert must never fail the
    /// mutation that triggered it.
    pub async fn record_best_effort(pool: &PgPool, entry: NewActivity) {
        if let Err(err) = Self::insert(pool, &entry).await {
            tracing::warn!(
                entity_type = entry.entity_type,
                entity_id = entry.entity_id,
                action = entry.action,
                error = %err,
                "Failed to write activity log entry"
            );
        }
    }

    /// Recent activity for one entity, newest first.
    pub async fn list_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_log
             WHERE entity_type = $1 AND entity_id = $2
             ORDER BY created_at DESC LIMIT $3"
        );
        sqlx::query_as::<_, ActivityEntry>(&query)
            .bind(entity_type)
            .bind(entity_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
