//! Notification send endpoint. Authenticated staff only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::notifications::EmailTemplate;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub to: String,
    /// Template name, e.g. `reservation_confirmation`.
    pub template: String,
    /// Template parameters, free-form JSON object.
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub template: String,
    pub subject: String,
    /// Delivery is simulated; the message is logged, not dispatched.
    pub simulated: bool,
}

/// POST /api/v1/notifications/email
pub async fn send_email(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SendEmailRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SendEmailResponse>>)> {
    let template = EmailTemplate::parse(&input.template)?;
    let (subject, _) = template.render(&input.params);

    state.email.send(&input.to, template, &input.params)?;

    tracing::info!(
        actor = user.profile_id,
        template = %input.template,
        "Notification email queued"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse::new(SendEmailResponse {
            template: input.template,
            subject,
            simulated: true,
        })),
    ))
}
