//! Handlers for the `/properties` resource, including nested units and
//! image uploads.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use atrium_core::error::CoreError;
use atrium_core::status::{PropertyStatus, UnitStatus};
use atrium_core::types::DbId;
use atrium_core::upload::decode_image_data_url;
use atrium_db::models::activity::NewActivity;
use atrium_db::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use atrium_db::models::property_unit::{CreatePropertyUnit, PropertyUnit, UpdatePropertyUnit};
use atrium_db::repositories::{ActivityRepo, PropertyRepo, PropertyUnitRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_property_exists;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// A property with its units joined in, for the detail endpoint.
#[derive(Debug, Serialize)]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub property: Property,
    pub units: Vec<PropertyUnit>,
}

/// POST /api/v1/properties
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> AppResult<(StatusCode, Json<DataResponse<Property>>)> {
    if let Some(status) = &input.status {
        PropertyStatus::parse(status)?;
    }
    if input.price_cents < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "price_cents must be non-negative".into(),
        )));
    }
    if let (Some(total), Some(available)) = (input.total_units, input.available_units) {
        if available > total {
            return Err(AppError::Core(CoreError::Validation(
                "available_units cannot exceed total_units".into(),
            )));
        }
    }

    let property = PropertyRepo::create(&state.pool, &input).await?;

    ActivityRepo::record_best_effort(
        &state.pool,
        NewActivity {
            actor_id: None,
            entity_type: "property",
            entity_id: property.id,
            action: "created",
            detail: json!({ "title": property.title }),
        },
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse::new(property))))
}

/// GET /api/v1/properties
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> AppResult<Json<DataResponse<Vec<Property>>>> {
    if let Some(status) = &filter.status {
        PropertyStatus::parse(status)?;
    }
    let properties = PropertyRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse::new(properties)))
}

/// GET /api/v1/properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PropertyDetail>>> {
    let property = ensure_property_exists(&state.pool, id).await?;
    let units = PropertyUnitRepo::list_by_property(&state.pool, id).await?;
    Ok(Json(DataResponse::new(PropertyDetail { property, units })))
}

/// PUT /api/v1/properties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<Json<DataResponse<Property>>> {
    if let Some(status) = &input.status {
        PropertyStatus::parse(status)?;
    }

    let property = PropertyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;

    ActivityRepo::record_best_effort(
        &state.pool,
        NewActivity {
            actor_id: None,
            entity_type: "property",
            entity_id: id,
            action: "updated",
            detail: json!({}),
        },
    )
    .await;

    Ok(Json(DataResponse::new(property)))
}

/// DELETE /api/v1/properties/{id} (admin only)
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PropertyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }));
    }

    tracing::info!(property_id = id, admin_id = admin.profile_id, "Property deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// GET /api/v1/properties/{id}/units
pub async fn list_units(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PropertyUnit>>>> {
    ensure_property_exists(&state.pool, id).await?;
    let units = PropertyUnitRepo::list_by_property(&state.pool, id).await?;
    Ok(Json(DataResponse::new(units)))
}

/// POST /api/v1/properties/{id}/units
pub async fn create_unit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePropertyUnit>,
) -> AppResult<(StatusCode, Json<DataResponse<PropertyUnit>>)> {
    ensure_property_exists(&state.pool, id).await?;
    if let Some(status) = &input.status {
        UnitStatus::parse(status)?;
    }

    let unit = PropertyUnitRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(unit))))
}

/// PUT /api/v1/units/{id}
pub async fn update_unit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePropertyUnit>,
) -> AppResult<Json<DataResponse<PropertyUnit>>> {
    if let Some(status) = &input.status {
        UnitStatus::parse(status)?;
    }

    let unit = PropertyUnitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PropertyUnit",
            id,
        }))?;
    Ok(Json(DataResponse::new(unit)))
}

// ---------------------------------------------------------------------------
// Image upload
// ---------------------------------------------------------------------------

/// Request body for image upload: a base64 data URL.
#[derive(Debug, Deserialize)]
pub struct UploadImageRequest {
    /// `data:image/png;base64,...`
    pub image: String,
}

/// POST /api/v1/properties/{id}/images
///
/// Decodes and validates the payload, writes it to the object store under
/// a timestamped path, and appends the public URL to the property's image
/// list in a single atomic statement.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UploadImageRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Property>>)> {
    ensure_property_exists(&state.pool, id).await?;

    let decoded = decode_image_data_url(&input.image)?;

    let path = format!(
        "properties/{id}/{}-{}.{}",
        chrono::Utc::now().timestamp_millis(),
        &uuid::Uuid::new_v4().simple().to_string()[..8],
        decoded.extension(),
    );

    let mime = decoded.mime.clone();
    let url = state.storage.upload(&path, decoded.bytes, &mime).await?;

    let property = PropertyRepo::append_image(&state.pool, id, &url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;

    tracing::info!(property_id = id, url = %url, "Property image uploaded");

    Ok((StatusCode::CREATED, Json(DataResponse::new(property))))
}
