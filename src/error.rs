//! Error types for the site server.

/// SMS delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    #[error("Twilio request failed: {0}")]
    Http(String),

    #[error("Twilio rejected the message (status {status}): {body}")]
    SendFailed { status: u16, body: String },

    #[error("Invalid response from Twilio: {0}")]
    InvalidResponse(String),
}
