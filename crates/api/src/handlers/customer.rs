//! Handlers for the `/customers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use atrium_core::error::CoreError;
use atrium_core::types::DbId;
use atrium_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use atrium_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<DataResponse<Customer>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".into(),
        )));
    }
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "email must be a valid email address".into(),
        )));
    }

    let customer = CustomerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(customer))))
}

/// GET /api/v1/customers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Customer>>>> {
    let customers = CustomerRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse::new(customers)))
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(DataResponse::new(customer)))
}

/// PUT /api/v1/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(DataResponse::new(customer)))
}
