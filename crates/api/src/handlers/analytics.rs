//! Analytics dashboard aggregates. Staff only.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use atrium_db::repositories::{AnalyticsRepo, InvoiceRepo, LeadStats, StatusCount};

use crate::error::AppResult;
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the dashboard renders in one payload.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub properties_by_status: Vec<StatusCount>,
    pub total_units: i64,
    pub available_units: i64,
    pub reservations_by_status: Vec<StatusCount>,
    pub leads: LeadStats,
    /// Sum of paid invoices, minor units.
    pub revenue_cents: i64,
    pub pending_deposits: i64,
}

/// GET /api/v1/analytics/dashboard
pub async fn dashboard(
    RequireManager(_): RequireManager,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardData>>> {
    let properties_by_status = AnalyticsRepo::properties_by_status(&state.pool).await?;
    let (total_units, available_units) = AnalyticsRepo::unit_totals(&state.pool).await?;
    let reservations_by_status = AnalyticsRepo::reservations_by_status(&state.pool).await?;
    let leads = AnalyticsRepo::lead_stats(&state.pool).await?;
    let revenue_cents = InvoiceRepo::total_paid_cents(&state.pool).await?;
    let pending_deposits = AnalyticsRepo::pending_deposits(&state.pool).await?;

    Ok(Json(DataResponse::new(DashboardData {
        properties_by_status,
        total_units,
        available_units,
        reservations_by_status,
        leads,
        revenue_cents,
        pending_deposits,
    })))
}
