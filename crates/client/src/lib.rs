//! Typed HTTP client and state containers for the Atrium API.
//!
//! [`ApiClient`] mirrors the server's `/api/v1` surface; the store types
//! ([`store::PropertyStore`], [`store::ReservationStore`],
//! [`store::SessionStore`]) hold the last-fetched state for a UI layer.
//! Stores replace their state wholesale on every response: the last
//! response wins, there is no request sequencing.

pub mod api;
pub mod models;
pub mod store;

pub use api::{ApiClient, ApiClientError};
