//! REST client for the Atrium API.
//!
//! Wraps the `/api/v1` surface using [`reqwest`]. Every successful
//! response is unwrapped from the `{ success, data }` envelope; error
//! bodies surface as [`ApiClientError::Api`] with the server's code and
//! message when they can be parsed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    AvailabilityReport, Envelope, ErrorBody, Lead, NewLead, NewReservation, Property,
    PropertyFilter, PublicProfile, Reservation, ReservationFilter, TokenPair,
};

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}) {code}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code from the body.
        code: String,
        /// Human-readable message from the body.
        message: String,
    },
}

/// A reservation with its property joined in, as returned by
/// `GET /reservations/{id}`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ReservationDetail {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub property: Property,
}

/// HTTP client for one Atrium API server.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    /// Bearer token attached to every request once set.
    access_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. `http://host:3000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            access_token: None,
        }
    }

    /// Attach (or clear) the bearer token used for authenticated routes.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    // --- Auth ---

    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, ApiClientError> {
        self.post(
            "/api/v1/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiClientError> {
        self.post(
            "/api/v1/auth/refresh",
            &serde_json::json!({ "refresh_token": refresh_token }),
        )
        .await
    }

    pub async fn logout(&self, refresh_token: &str) -> Result<(), ApiClientError> {
        let _: serde_json::Value = self
            .post(
                "/api/v1/auth/logout",
                &serde_json::json!({ "refresh_token": refresh_token }),
            )
            .await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<PublicProfile, ApiClientError> {
        self.get("/api/v1/auth/me").await
    }

    // --- Properties ---

    pub async fn list_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, ApiClientError> {
        self.get_query("/api/v1/properties", filter).await
    }

    pub async fn get_property(&self, id: i64) -> Result<serde_json::Value, ApiClientError> {
        self.get(&format!("/api/v1/properties/{id}")).await
    }

    pub async fn create_property(
        &self,
        body: &serde_json::Value,
    ) -> Result<Property, ApiClientError> {
        self.post("/api/v1/properties", body).await
    }

    pub async fn update_property(
        &self,
        id: i64,
        body: &serde_json::Value,
    ) -> Result<Property, ApiClientError> {
        self.put(&format!("/api/v1/properties/{id}"), body).await
    }

    // --- Reservations ---

    pub async fn list_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, ApiClientError> {
        self.get_query("/api/v1/reservations", filter).await
    }

    pub async fn get_reservation(&self, id: i64) -> Result<ReservationDetail, ApiClientError> {
        self.get(&format!("/api/v1/reservations/{id}")).await
    }

    pub async fn create_reservation(
        &self,
        body: &NewReservation,
    ) -> Result<Reservation, ApiClientError> {
        self.post("/api/v1/reservations", body).await
    }

    pub async fn update_reservation(
        &self,
        id: i64,
        body: &serde_json::Value,
    ) -> Result<Reservation, ApiClientError> {
        self.put(&format!("/api/v1/reservations/{id}"), body).await
    }

    // --- Leads ---

    pub async fn list_leads(&self) -> Result<Vec<Lead>, ApiClientError> {
        self.get("/api/v1/leads").await
    }

    pub async fn create_lead(&self, body: &NewLead) -> Result<Lead, ApiClientError> {
        self.post("/api/v1/leads", body).await
    }

    pub async fn match_properties(
        &self,
        preferences: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiClientError> {
        self.post("/api/v1/leads/match", preferences).await
    }

    // --- Availability ---

    pub async fn check_availability(
        &self,
        property_id: i64,
        unit_id: Option<i64>,
        date: Option<chrono::NaiveDate>,
    ) -> Result<AvailabilityReport, ApiClientError> {
        #[derive(Serialize)]
        struct Params {
            property_id: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            unit_id: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            date: Option<chrono::NaiveDate>,
        }
        self.get_query(
            "/api/v1/availability",
            &Params {
                property_id,
                unit_id,
                date,
            },
        )
        .await
    }

    // --- Internals ---

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let mut request = self.client.get(format!("{}{path}", self.base_url));
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        Self::parse_response(request.send().await?).await
    }

    async fn get_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiClientError> {
        let mut request = self
            .client
            .get(format!("{}{path}", self.base_url))
            .query(query);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        Self::parse_response(request.send().await?).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        let mut request = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        Self::parse_response(request.send().await?).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        let mut request = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        Self::parse_response(request.send().await?).await
    }

    /// Unwrap the success envelope, or turn an error body into
    /// [`ApiClientError::Api`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            let envelope: Envelope<T> = response.json().await?;
            return Ok(envelope.data);
        }

        let body = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => (parsed.error.code, parsed.error.message),
            Err(_) => ("UNKNOWN".to_string(), body),
        };
        Err(ApiClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}
