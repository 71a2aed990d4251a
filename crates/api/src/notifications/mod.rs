//! Outbound email: template rendering and (simulated) delivery.
//!
//! Messages are built with `lettre` so addresses are validated, then logged
//! instead of dispatched; no SMTP transport is wired up.

use lettre::message::header::ContentType;
use lettre::Message;
use serde_json::Value;

use atrium_core::error::CoreError;

/// The fixed set of transactional email templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    ReservationConfirmation,
    ViewingReminder,
    PaymentReceipt,
}

impl EmailTemplate {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "reservation_confirmation" => Ok(Self::ReservationConfirmation),
            "viewing_reminder" => Ok(Self::ViewingReminder),
            "payment_receipt" => Ok(Self::PaymentReceipt),
            other => Err(CoreError::Validation(format!(
                "unknown email template: {other}"
            ))),
        }
    }

    /// Render (subject, body) from the template parameters.
    ///
    /// Missing parameters render as empty strings rather than failing; a
    /// notification with a blank field is more useful than no notification.
    pub fn render(self, params: &Value) -> (String, String) {
        let get = |key: &str| -> String {
            params
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        match self {
            Self::ReservationConfirmation => (
                format!("Reservation confirmed: {}", get("property_title")),
                format!(
                    "Hi {},\n\nYour reservation for {} is confirmed.\n\
                     Confirmation code: {}\n\nThe Atrium team",
                    get("customer_name"),
                    get("property_title"),
                    get("confirmation_code"),
                ),
            ),
            Self::ViewingReminder => (
                format!("Viewing reminder: {}", get("property_title")),
                format!(
                    "Hi {},\n\nThis is a reminder of your viewing of {} on {}.\n\n\
                     The Atrium team",
                    get("customer_name"),
                    get("property_title"),
                    get("viewing_date"),
                ),
            ),
            Self::PaymentReceipt => (
                format!("Payment received: {}", get("reference")),
                format!(
                    "Hi {},\n\nWe received your payment of {} {}.\n\
                     Reference: {}\n\nThe Atrium team",
                    get("customer_name"),
                    get("amount"),
                    get("currency"),
                    get("reference"),
                ),
            ),
        }
    }
}

/// Builds and "sends" transactional email. Delivery is simulated: the
/// rendered message is logged at INFO.
pub struct EmailSender {
    from: String,
}

impl EmailSender {
    /// | Env Var      | Default              |
    /// |--------------|----------------------|
    /// | `EMAIL_FROM` | `noreply@atrium.app` |
    pub fn from_env() -> Self {
        Self {
            from: std::env::var("EMAIL_FROM").unwrap_or_else(|_| "noreply@atrium.app".into()),
        }
    }

    pub fn new(from: String) -> Self {
        Self { from }
    }

    /// Render the template and log the outgoing message.
    ///
    /// Fails only if the addresses are invalid; a malformed recipient is a
    /// caller error, not a delivery failure.
    pub fn send(
        &self,
        to: &str,
        template: EmailTemplate,
        params: &Value,
    ) -> Result<(), CoreError> {
        let (subject, body) = template.render(params);

        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| CoreError::Internal(format!("invalid sender address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| CoreError::Validation(format!("invalid recipient address: {e}")))?)
            .subject(&subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.clone())
            .map_err(|e| CoreError::Internal(format!("failed to build email: {e}")))?;

        tracing::info!(
            to,
            subject = %subject,
            bytes = message.formatted().len(),
            "Email send simulated (no transport configured)"
        );
        tracing::debug!(body = %body, "Simulated email body");

        Ok(())
    }
}
