//! Contact-form submission intake.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::sms::{SmsForwarder, SmsOutcome};

/// A validated contact-form submission. Transient: lives for one request,
/// discarded once the forwarding attempt completes.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    /// Email address or phone number, whichever the form supplied.
    pub contact: String,
    pub message: String,
}

/// Raw request body. Fields are optional so that presence is checked by
/// [`ContactRequest::validate`] (a 400) rather than by the JSON extractor
/// (a 422).
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    /// Check presence of the required fields: name, a contact method
    /// (email or phone), and a message. Presence only — no format or
    /// length checks.
    pub fn validate(self) -> Option<Submission> {
        let name = non_empty(self.name)?;
        let contact = non_empty(self.email).or_else(|| non_empty(self.phone))?;
        let message = non_empty(self.message)?;

        Some(Submission {
            name,
            contact,
            message,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// Success response for the contact endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactResponse {
    message: &'static str,
    sms_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    twilio_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'static str>,
}

/// Shared state for the contact routes.
#[derive(Clone)]
pub struct ContactState {
    pub forwarder: Arc<SmsForwarder>,
}

/// Build the contact routes. Non-POST requests to the endpoint get a 405
/// with the same JSON body the original handler returned.
pub fn contact_routes(state: ContactState) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(submit_contact).fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({"message": "Method not allowed"})),
    )
        .into_response()
}

/// POST /api/contact
///
/// Validates field presence, forwards the submission, and reports the
/// outcome. Provider faults are logged and surfaced as a generic 500.
async fn submit_contact(
    State(state): State<ContactState>,
    Json(request): Json<ContactRequest>,
) -> Response {
    let Some(submission) = request.validate() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"message": "Missing required fields"})),
        )
            .into_response();
    };

    match state.forwarder.forward(&submission).await {
        Ok(SmsOutcome::Sent { sid }) => Json(ContactResponse {
            message: "Success",
            sms_sent: true,
            twilio_sid: Some(sid),
            note: None,
        })
        .into_response(),
        Ok(SmsOutcome::Skipped) => Json(ContactResponse {
            message: "Success",
            sms_sent: false,
            twilio_sid: None,
            note: Some("SMS not configured; submission was logged"),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to forward contact submission");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"message": "Internal server error"})),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        message: Option<&str>,
    ) -> ContactRequest {
        ContactRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            phone: phone.map(String::from),
            message: message.map(String::from),
        }
    }

    #[test]
    fn validate_accepts_email_contact() {
        let submission = request(Some("Jane"), Some("jane@example.com"), None, Some("Leak"))
            .validate()
            .unwrap();
        assert_eq!(submission.contact, "jane@example.com");
    }

    #[test]
    fn validate_accepts_phone_contact() {
        let submission = request(Some("Jane"), None, Some("210-555-0000"), Some("Leak"))
            .validate()
            .unwrap();
        assert_eq!(submission.contact, "210-555-0000");
    }

    #[test]
    fn validate_rejects_each_missing_field() {
        assert!(request(None, Some("j@e.com"), None, Some("Leak"))
            .validate()
            .is_none());
        assert!(request(Some("Jane"), None, None, Some("Leak"))
            .validate()
            .is_none());
        assert!(request(Some("Jane"), Some("j@e.com"), None, None)
            .validate()
            .is_none());
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert!(request(Some("  "), Some("j@e.com"), None, Some("Leak"))
            .validate()
            .is_none());
        assert!(request(Some("Jane"), Some(""), Some(""), Some("Leak"))
            .validate()
            .is_none());
    }
}
