//! Availability check for a property, an optional unit, and an optional
//! viewing date.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use atrium_core::availability::demand_score;
use atrium_core::error::CoreError;
use atrium_core::types::DbId;
use atrium_db::repositories::{PropertyUnitRepo, ReservationRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_property_exists;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub property_id: DbId,
    pub unit_id: Option<DbId>,
    /// Requested viewing date (ISO 8601).
    pub date: Option<NaiveDate>,
}

/// Flat availability report for a property and optionally one of its units.
#[derive(Debug, Serialize)]
pub struct AvailabilityReport {
    pub property_id: DbId,
    pub property_status: String,
    pub available: bool,
    pub total_units: i32,
    pub available_units: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlapping_reservations: Option<i64>,
    pub total_reservations: i64,
    pub demand_score: i64,
}

/// GET /api/v1/availability
pub async fn check(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Json<DataResponse<AvailabilityReport>>> {
    let property = ensure_property_exists(&state.pool, params.property_id).await?;

    let unit_status = match params.unit_id {
        Some(unit_id) => {
            let unit = PropertyUnitRepo::find_by_id(&state.pool, unit_id)
                .await?
                .filter(|u| u.property_id == property.id)
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "PropertyUnit",
                    id: unit_id,
                }))?;
            Some(unit.status)
        }
        None => None,
    };

    let total_reservations =
        ReservationRepo::count_for_property(&state.pool, property.id).await?;

    let overlapping = match params.date {
        Some(date) => {
            Some(ReservationRepo::count_overlapping(&state.pool, property.id, date).await?)
        }
        None => None,
    };

    let available = match &unit_status {
        Some(status) => status == "available",
        None => property.status == "available" && property.available_units > 0,
    };

    Ok(Json(DataResponse::new(AvailabilityReport {
        property_id: property.id,
        property_status: property.status,
        available,
        total_units: property.total_units,
        available_units: property.available_units,
        unit_id: params.unit_id,
        unit_status,
        overlapping_reservations: overlapping,
        total_reservations,
        demand_score: demand_score(total_reservations),
    })))
}
