//! Property entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// A property row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub title: String,
    pub project: Option<String>,
    pub location: String,
    pub property_type: String,
    /// Asking price in minor currency units.
    pub price_cents: i64,
    pub currency: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub size_sqm: Option<f64>,
    pub total_units: i32,
    pub available_units: i32,
    pub status: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new property.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProperty {
    pub title: String,
    pub project: Option<String>,
    pub location: String,
    /// Defaults to `apartment` if omitted.
    pub property_type: Option<String>,
    pub price_cents: i64,
    /// Defaults to `usd` if omitted.
    pub currency: Option<String>,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    pub size_sqm: Option<f64>,
    /// Defaults to 1 if omitted.
    pub total_units: Option<i32>,
    /// Defaults to `total_units` if omitted.
    pub available_units: Option<i32>,
    pub status: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// DTO for updating an existing property. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub project: Option<String>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub size_sqm: Option<f64>,
    pub total_units: Option<i32>,
    pub available_units: Option<i32>,
    pub status: Option<String>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
}

/// Filter parameters for `GET /properties`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilter {
    pub status: Option<String>,
    pub project: Option<String>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    pub bedrooms: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
