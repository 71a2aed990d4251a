//! State containers for UI layers.
//!
//! Each store holds the last-fetched items, an optional selection, a
//! loading flag, and the last error. Refresh methods replace the state
//! wholesale with whatever the API returned: the last response wins, and
//! there is no request sequencing or merging.

use crate::api::{ApiClient, ApiClientError};
use crate::models::{
    Lead, Property, PropertyFilter, PublicProfile, Reservation, ReservationFilter, TokenPair,
};

/// Listing state for properties.
#[derive(Debug, Default)]
pub struct PropertyStore {
    pub items: Vec<Property>,
    pub selected: Option<Property>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: PropertyFilter,
}

impl PropertyStore {
    /// Re-fetch the list with the current filter, replacing `items`.
    pub async fn refresh(&mut self, api: &ApiClient) {
        self.loading = true;
        match api.list_properties(&self.filter).await {
            Ok(items) => self.apply(Ok(items)),
            Err(err) => self.apply(Err(err)),
        }
    }

    /// Change the filter and drop state derived from the old one.
    pub fn set_filter(&mut self, filter: PropertyFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.items.clear();
            self.selected = None;
        }
    }

    /// Select an item from the current list by id.
    pub fn select(&mut self, id: i64) {
        self.selected = self.items.iter().find(|p| p.id == id).cloned();
    }

    /// Apply a fetch result, replacing the store's state wholesale.
    pub fn apply(&mut self, result: Result<Vec<Property>, ApiClientError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                // Drop a stale selection that no longer exists.
                if let Some(selected) = &self.selected {
                    if !items.iter().any(|p| p.id == selected.id) {
                        self.selected = None;
                    }
                }
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Listing state for reservations.
#[derive(Debug, Default)]
pub struct ReservationStore {
    pub items: Vec<Reservation>,
    pub selected: Option<Reservation>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: ReservationFilter,
}

impl ReservationStore {
    pub async fn refresh(&mut self, api: &ApiClient) {
        self.loading = true;
        let result = api.list_reservations(&self.filter).await;
        self.apply(result);
    }

    pub fn set_filter(&mut self, filter: ReservationFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.items.clear();
            self.selected = None;
        }
    }

    pub fn select(&mut self, id: i64) {
        self.selected = self.items.iter().find(|r| r.id == id).cloned();
    }

    pub fn apply(&mut self, result: Result<Vec<Reservation>, ApiClientError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                if let Some(selected) = &self.selected {
                    if !items.iter().any(|r| r.id == selected.id) {
                        self.selected = None;
                    }
                }
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Authenticated-session state: the current profile and token pair.
#[derive(Debug, Default)]
pub struct SessionStore {
    pub profile: Option<PublicProfile>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionStore {
    /// Log in and store the issued tokens; also attaches the access token
    /// to the client for subsequent authenticated calls.
    pub async fn login(&mut self, api: &mut ApiClient, email: &str, password: &str) {
        self.loading = true;
        let result = api.login(email, password).await;
        self.apply(result);
        api.set_access_token(self.access_token.clone());
    }

    /// Rotate the refresh token. On failure the session is cleared, since
    /// the stored token is no longer usable.
    pub async fn refresh(&mut self, api: &mut ApiClient) {
        let Some(token) = self.refresh_token.clone() else {
            return;
        };
        self.loading = true;
        match api.refresh(&token).await {
            Ok(pair) => self.apply(Ok(pair)),
            Err(err) => {
                self.clear();
                self.error = Some(err.to_string());
            }
        }
        api.set_access_token(self.access_token.clone());
    }

    /// Revoke the session server-side and clear local state regardless of
    /// the outcome.
    pub async fn logout(&mut self, api: &mut ApiClient) {
        if let Some(token) = self.refresh_token.clone() {
            if let Err(err) = api.logout(&token).await {
                tracing::warn!(error = %err, "Logout request failed, clearing local session anyway");
            }
        }
        self.clear();
        api.set_access_token(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Apply a login/refresh result, replacing the session wholesale.
    pub fn apply(&mut self, result: Result<TokenPair, ApiClientError>) {
        self.loading = false;
        match result {
            Ok(pair) => {
                self.profile = Some(pair.profile);
                self.access_token = Some(pair.access_token);
                self.refresh_token = Some(pair.refresh_token);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    fn clear(&mut self) {
        self.profile = None;
        self.access_token = None;
        self.refresh_token = None;
        self.loading = false;
        self.error = None;
    }
}

/// Listing state for leads. No filter; the server already returns them
/// ordered by score.
#[derive(Debug, Default)]
pub struct LeadStore {
    pub items: Vec<Lead>,
    pub selected: Option<Lead>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LeadStore {
    pub async fn refresh(&mut self, api: &ApiClient) {
        self.loading = true;
        let result = api.list_leads().await;
        self.apply(result);
    }

    pub fn apply(&mut self, result: Result<Vec<Lead>, ApiClientError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                if let Some(selected) = &self.selected {
                    if !items.iter().any(|l| l.id == selected.id) {
                        self.selected = None;
                    }
                }
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn property(id: i64, title: &str) -> Property {
        Property {
            id,
            title: title.to_string(),
            project: None,
            location: "Marina District".to_string(),
            property_type: "apartment".to_string(),
            price_cents: 25_000_000,
            currency: "usd".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            size_sqm: Some(88.0),
            total_units: 10,
            available_units: 4,
            status: "available".to_string(),
            images: vec![],
            amenities: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn api_error() -> ApiClientError {
        ApiClientError::Api {
            status: 500,
            code: "INTERNAL_ERROR".to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn apply_replaces_items_wholesale() {
        let mut store = PropertyStore::default();
        store.apply(Ok(vec![property(1, "First"), property(2, "Second")]));
        assert_eq!(store.items.len(), 2);

        // A later response with different contents fully replaces the
        // earlier one.
        store.apply(Ok(vec![property(3, "Third")]));
        assert_eq!(store.items.len(), 1);
        assert_eq!(store.items[0].id, 3);
        assert!(!store.loading);
        assert!(store.error.is_none());
    }

    #[test]
    fn apply_error_keeps_items_and_sets_error() {
        let mut store = PropertyStore::default();
        store.apply(Ok(vec![property(1, "First")]));
        store.apply(Err(api_error()));
        assert_eq!(store.items.len(), 1);
        assert!(store.error.as_deref().unwrap().contains("INTERNAL_ERROR"));
    }

    #[test]
    fn stale_selection_is_dropped() {
        let mut store = PropertyStore::default();
        store.apply(Ok(vec![property(1, "First"), property(2, "Second")]));
        store.select(2);
        assert!(store.selected.is_some());

        store.apply(Ok(vec![property(1, "First")]));
        assert!(store.selected.is_none());
    }

    #[test]
    fn set_filter_clears_derived_state() {
        let mut store = PropertyStore::default();
        store.apply(Ok(vec![property(1, "First")]));
        store.select(1);

        store.set_filter(PropertyFilter {
            status: Some("sold".to_string()),
            ..Default::default()
        });
        assert!(store.items.is_empty());
        assert!(store.selected.is_none());

        // Setting an identical filter is a no-op.
        let filter = store.filter.clone();
        store.apply(Ok(vec![property(1, "First")]));
        store.set_filter(filter);
        assert_eq!(store.items.len(), 1);
    }

    #[test]
    fn session_apply_and_clear() {
        let mut store = SessionStore::default();
        assert!(!store.is_authenticated());

        store.apply(Ok(TokenPair {
            access_token: "jwt".to_string(),
            refresh_token: "opaque".to_string(),
            profile: PublicProfile {
                id: 7,
                email: "rep@atrium.app".to_string(),
                full_name: "Sales Rep".to_string(),
                phone: None,
                role: "sales_rep".to_string(),
                active: true,
                created_at: Utc::now(),
            },
        }));
        assert!(store.is_authenticated());
        assert_eq!(store.profile.as_ref().unwrap().id, 7);

        store.apply(Err(api_error()));
        // A failed refresh attempt records the error but apply() alone does
        // not clear an existing session.
        assert!(store.is_authenticated());
        assert!(store.error.is_some());
    }
}
