//! Aggregate queries backing the analytics dashboard.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// One status/count pair from a GROUP BY query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Lead aggregates for the dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeadStats {
    pub total: i64,
    pub average_score: f64,
    pub qualified: i64,
}

/// Provides read-only aggregates across tables.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Property counts grouped by status.
    pub async fn properties_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as(
            "SELECT status, COUNT(*) AS count FROM properties GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Reservation counts grouped by status.
    pub async fn reservations_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as(
            "SELECT status, COUNT(*) AS count FROM reservations GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Total and available unit counts across all properties.
    pub async fn unit_totals(pool: &PgPool) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT COALESCE(SUM(total_units), 0)::bigint,
                    COALESCE(SUM(available_units), 0)::bigint
             FROM properties",
        )
        .fetch_one(pool)
        .await
    }

    /// Lead totals: count, mean score, qualified-or-better count.
    pub async fn lead_stats(pool: &PgPool) -> Result<LeadStats, sqlx::Error> {
        sqlx::query_as(
            "SELECT COUNT(*) AS total,
                    COALESCE(AVG(score), 0)::double precision AS average_score,
                    COUNT(*) FILTER (WHERE status IN ('qualified', 'converted')) AS qualified
             FROM leads",
        )
        .fetch_one(pool)
        .await
    }

    /// Count of reservations with an unpaid deposit.
    pub async fn pending_deposits(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations
             WHERE deposit_status = 'unpaid' AND status <> 'cancelled'",
        )
        .fetch_one(pool)
        .await
    }
}
