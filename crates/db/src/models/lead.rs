//! Lead entity model and DTOs.
//!
//! `score` and `insights` are always computed server-side from the other
//! fields; they are never accepted from the client.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// A lead row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Stated budget range in minor currency units.
    pub budget_min_cents: Option<i64>,
    pub budget_max_cents: Option<i64>,
    pub buyer_type: Option<String>,
    pub timeline: Option<String>,
    pub preferred_location: Option<String>,
    pub source: Option<String>,
    pub status: String,
    pub score: i16,
    pub insights: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lead.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub budget_min_cents: Option<i64>,
    pub budget_max_cents: Option<i64>,
    pub buyer_type: Option<String>,
    pub timeline: Option<String>,
    pub preferred_location: Option<String>,
    pub source: Option<String>,
}

/// DTO for updating a lead. All fields are optional; the score is
/// recomputed from the merged row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLead {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub budget_min_cents: Option<i64>,
    pub budget_max_cents: Option<i64>,
    pub buyer_type: Option<String>,
    pub timeline: Option<String>,
    pub preferred_location: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
}

/// Filter parameters for `GET /leads`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadFilter {
    pub status: Option<String>,
    /// Only leads scoring at or above this value.
    pub min_score: Option<i16>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
