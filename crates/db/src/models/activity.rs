//! Best-effort activity log model.

use serde::Serialize;
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// A row from the `activity_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityEntry {
    pub id: DbId,
    pub actor_id: Option<DbId>,
    pub entity_type: String,
    pub entity_id: DbId,
    pub action: String,
    pub detail: serde_json::Value,
    pub created_at: Timestamp,
}

/// Insert payload for an activity entry.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub actor_id: Option<DbId>,
    pub entity_type: &'static str,
    pub entity_id: DbId,
    pub action: &'static str,
    pub detail: serde_json::Value,
}
