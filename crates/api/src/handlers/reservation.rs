//! Handlers for the `/reservations` resource.
//!
//! A reservation status change carries property/unit side effects; the
//! repository runs the whole transition in one transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use atrium_core::codes::confirmation_code;
use atrium_core::error::CoreError;
use atrium_core::status::{DepositStatus, ReservationStatus};
use atrium_core::types::DbId;
use atrium_db::models::activity::NewActivity;
use atrium_db::models::property::Property;
use atrium_db::models::reservation::{
    CreateReservation, Reservation, ReservationFilter, UpdateReservation,
};
use atrium_db::repositories::{ActivityRepo, ReservationRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_property_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// A reservation with its property joined in, for the detail endpoint.
#[derive(Debug, Serialize)]
pub struct ReservationDetail {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub property: Property,
}

/// POST /api/v1/reservations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<DataResponse<Reservation>>)> {
    if input.customer_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "customer_name is required".into(),
        )));
    }
    if !input.customer_email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "customer_email must be a valid email address".into(),
        )));
    }
    ensure_property_exists(&state.pool, input.property_id).await?;

    let code = confirmation_code();
    let reservation = ReservationRepo::create(&state.pool, &input, &code).await?;

    ActivityRepo::record_best_effort(
        &state.pool,
        NewActivity {
            actor_id: None,
            entity_type: "reservation",
            entity_id: reservation.id,
            action: "created",
            detail: json!({
                "property_id": reservation.property_id,
                "confirmation_code": reservation.confirmation_code,
            }),
        },
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse::new(reservation))))
}

/// GET /api/v1/reservations
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ReservationFilter>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    if let Some(status) = &filter.status {
        ReservationStatus::parse(status)?;
    }
    let reservations = ReservationRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse::new(reservations)))
}

/// GET /api/v1/reservations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ReservationDetail>>> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;
    let property = ensure_property_exists(&state.pool, reservation.property_id).await?;

    Ok(Json(DataResponse::new(ReservationDetail {
        reservation,
        property,
    })))
}

/// PUT /api/v1/reservations/{id}
///
/// Field updates and the optional status transition are applied in that
/// order; the transition runs transactionally against the linked property
/// and unit.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    if let Some(deposit) = &input.deposit_status {
        DepositStatus::parse(deposit)?;
    }
    let new_status = input
        .status
        .as_deref()
        .map(ReservationStatus::parse)
        .transpose()?;

    let mut reservation = ReservationRepo::update_fields(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;

    if let Some(status) = new_status {
        if reservation.status != status.as_str() {
            reservation = ReservationRepo::set_status(&state.pool, id, status)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Reservation",
                    id,
                }))?;

            ActivityRepo::record_best_effort(
                &state.pool,
                NewActivity {
                    actor_id: None,
                    entity_type: "reservation",
                    entity_id: id,
                    action: "status_changed",
                    detail: json!({ "status": status.as_str() }),
                },
            )
            .await;
        }
    }

    Ok(Json(DataResponse::new(reservation)))
}
