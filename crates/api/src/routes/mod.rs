pub mod analytics;
pub mod auth;
pub mod availability;
pub mod customer;
pub mod health;
pub mod lead;
pub mod notification;
pub mod payment;
pub mod property;
pub mod reservation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout
/// /auth/me                           current profile (requires auth)
///
/// /properties                        list, create
/// /properties/{id}                   get, update, delete (admin)
/// /properties/{id}/units             list, create
/// /properties/{id}/images            upload image (POST)
/// /units/{id}                        update
///
/// /reservations                      list, create
/// /reservations/{id}                 get (property joined), update
/// /reservations/{id}/invoices        list invoices
///
/// /customers                         list, create
/// /customers/{id}                    get, update
///
/// /leads                             list, create
/// /leads/match                       property matching (POST)
/// /leads/{id}                        get, update
///
/// /availability                      availability check (GET)
///
/// /analytics/dashboard               dashboard aggregates (manager)
///
/// /payments/intent                   create payment intent (POST)
/// /payments/confirm                  confirm payment (POST)
/// /invoices                          create (POST)
/// /invoices/{id}                     get
///
/// /notifications/email               send templated email (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(property::router())
        .merge(reservation::router())
        .nest("/customers", customer::router())
        .nest("/leads", lead::router())
        .merge(availability::router())
        .nest("/analytics", analytics::router())
        .merge(payment::router())
        .nest("/notifications", notification::router())
}
