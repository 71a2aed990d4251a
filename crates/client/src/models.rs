//! Client-side mirrors of the API's JSON payloads.
//!
//! These deliberately duplicate the server models rather than depending on
//! the server crates, so the client builds against the wire format alone.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The `{ "success": true, "data": ... }` envelope every endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// The `{ "error": { "code", "message" } }` body returned on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub project: Option<String>,
    pub location: String,
    pub property_type: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub property_id: i64,
    pub unit_id: Option<i64>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: String,
    pub deposit_status: String,
    pub viewing_date: Option<NaiveDate>,
    pub confirmation_code: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub budget_min_cents: Option<i64>,
    pub budget_max_cents: Option<i64>,
    pub buyer_type: Option<String>,
    pub timeline: Option<String>,
    pub preferred_location: Option<String>,
    pub source: Option<String>,
    pub status: String,
    pub score: i16,
    pub insights: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub profile: PublicProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityReport {
    pub property_id: i64,
    pub property_status: String,
    pub available: bool,
    pub total_units: i64,
    pub available_units: i64,
    pub unit_id: Option<i64>,
    pub unit_status: Option<String>,
    pub overlapping_reservations: Option<i64>,
    pub total_reservations: i64,
    pub demand_score: i64,
}

/// Query filter for `GET /properties`; `None` fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
}

/// Query filter for `GET /reservations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReservationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewReservation {
    pub property_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i64>,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewing_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewLead {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
