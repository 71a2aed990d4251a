//! HTTP handlers, one module per resource.

pub mod analytics;
pub mod auth;
pub mod availability;
pub mod customer;
pub mod lead;
pub mod notification;
pub mod payment;
pub mod property;
pub mod reservation;

use atrium_core::error::CoreError;
use atrium_core::types::DbId;
use atrium_db::models::property::Property;
use atrium_db::repositories::PropertyRepo;

use crate::error::{AppError, AppResult};

/// Verify that a property exists, returning the full row.
pub(crate) async fn ensure_property_exists(
    pool: &sqlx::PgPool,
    id: DbId,
) -> AppResult<Property> {
    PropertyRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        })
    })
}
