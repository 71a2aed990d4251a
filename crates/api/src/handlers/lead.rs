//! Handlers for the `/leads` resource and property matching.
//!
//! The lead score and its insight notes are derived server-side on every
//! create and update; client-supplied values are ignored.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use atrium_core::error::CoreError;
use atrium_core::matching::{match_properties, CandidateProperty, MatchPreferences, PropertyMatch};
use atrium_core::scoring::{score_lead, LeadSignals};
use atrium_core::status::LeadStatus;
use atrium_core::types::DbId;
use atrium_db::models::lead::{CreateLead, Lead, LeadFilter, UpdateLead};
use atrium_db::models::property::Property;
use atrium_db::repositories::{LeadRepo, PropertyRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Budgets are stored in minor units; the scorer works in whole currency
/// units.
fn cents_to_whole(cents: Option<i64>) -> Option<i64> {
    cents.map(|c| c / 100)
}

/// POST /api/v1/leads
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<(StatusCode, Json<DataResponse<Lead>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".into(),
        )));
    }

    let scored = score_lead(&LeadSignals {
        budget_max: cents_to_whole(input.budget_max_cents),
        has_phone: input.phone.as_deref().is_some_and(|p| !p.trim().is_empty()),
        has_email: input.email.as_deref().is_some_and(|e| e.contains('@')),
        buyer_type: input.buyer_type.as_deref(),
        timeline: input.timeline.as_deref(),
    });

    let lead =
        LeadRepo::create(&state.pool, &input, scored.score as i16, &scored.insights).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(lead))))
}

/// GET /api/v1/leads
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<LeadFilter>,
) -> AppResult<Json<DataResponse<Vec<Lead>>>> {
    if let Some(status) = &filter.status {
        LeadStatus::parse(status)?;
    }
    let leads = LeadRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse::new(leads)))
}

/// GET /api/v1/leads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Lead>>> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(DataResponse::new(lead)))
}

/// PUT /api/v1/leads/{id}
///
/// The score is recomputed from the merged row, so a partial update that
/// touches any scoring signal moves the score with it.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLead>,
) -> AppResult<Json<DataResponse<Lead>>> {
    if let Some(status) = &input.status {
        LeadStatus::parse(status)?;
    }
    let current = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    let budget_max_cents = input.budget_max_cents.or(current.budget_max_cents);
    let phone = input.phone.as_deref().or(current.phone.as_deref());
    let email = input.email.as_deref().or(current.email.as_deref());
    let buyer_type = input.buyer_type.as_deref().or(current.buyer_type.as_deref());
    let timeline = input.timeline.as_deref().or(current.timeline.as_deref());

    let scored = score_lead(&LeadSignals {
        budget_max: cents_to_whole(budget_max_cents),
        has_phone: phone.is_some_and(|p| !p.trim().is_empty()),
        has_email: email.is_some_and(|e| e.contains('@')),
        buyer_type,
        timeline,
    });

    let lead = LeadRepo::update(&state.pool, id, &input, scored.score as i16, &scored.insights)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(DataResponse::new(lead)))
}

/// A scored match with its property joined in.
#[derive(Debug, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub fit: PropertyMatch,
    pub property: Property,
}

/// POST /api/v1/leads/match
///
/// Scores every available property against the supplied preferences and
/// returns the strongest matches, best first.
pub async fn match_for_preferences(
    State(state): State<AppState>,
    Json(prefs): Json<MatchPreferences>,
) -> AppResult<Json<DataResponse<Vec<MatchResult>>>> {
    let properties = PropertyRepo::list_available(&state.pool).await?;

    let candidates: Vec<CandidateProperty> = properties
        .iter()
        .map(|p| CandidateProperty {
            id: p.id,
            price_cents: p.price_cents,
            bedrooms: p.bedrooms,
            location: p.location.clone(),
            amenities: p.amenities.clone(),
        })
        .collect();

    let mut by_id: HashMap<DbId, Property> =
        properties.into_iter().map(|p| (p.id, p)).collect();

    let results = match_properties(&candidates, &prefs)
        .into_iter()
        .filter_map(|fit| {
            by_id
                .remove(&fit.property_id)
                .map(|property| MatchResult { fit, property })
        })
        .collect();

    Ok(Json(DataResponse::new(results)))
}
