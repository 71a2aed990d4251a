//! Property unit entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// A unit row from the `property_units` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyUnit {
    pub id: DbId,
    pub property_id: DbId,
    pub unit_number: String,
    pub floor: Option<i32>,
    pub unit_type: Option<String>,
    pub size_sqm: Option<f64>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub price_cents: i64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a unit under a property.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyUnit {
    pub unit_number: String,
    pub floor: Option<i32>,
    pub unit_type: Option<String>,
    pub size_sqm: Option<f64>,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    /// Defaults to 0 when the unit inherits the property's pricing.
    #[serde(default)]
    pub price_cents: i64,
    pub status: Option<String>,
}

/// DTO for updating a unit. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePropertyUnit {
    pub unit_number: Option<String>,
    pub floor: Option<i32>,
    pub unit_type: Option<String>,
    pub size_sqm: Option<f64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub price_cents: Option<i64>,
    pub status: Option<String>,
}
