//! SMS forwarding for contact submissions.
//!
//! Formats a plain-text notification from a validated submission and
//! sends it through Twilio. When Twilio credentials are absent the
//! forwarder degrades to logging the payload and reporting that no
//! message was sent.

pub mod twilio;

use tracing::{info, warn};

use crate::contact::Submission;
use crate::error::SmsError;
use twilio::{TwilioClient, TwilioConfig};

/// Destination used when `SMS_TARGET_NUMBER` is not set.
const DEFAULT_TARGET_NUMBER: &str = "210-355-2804";

/// Outcome of a forwarding attempt.
#[derive(Debug)]
pub enum SmsOutcome {
    /// Delivered to Twilio; `sid` is the provider's message identifier.
    Sent { sid: String },
    /// Twilio is not configured; the payload was logged instead.
    Skipped,
}

/// Forwards contact submissions as SMS.
pub struct SmsForwarder {
    client: Option<TwilioClient>,
    target_number: String,
}

impl SmsForwarder {
    /// Build from environment variables. Missing credentials are not an
    /// error: the forwarder runs in log-only mode.
    pub fn from_env() -> Self {
        let client = TwilioConfig::from_env().map(TwilioClient::new);
        if client.is_none() {
            warn!("Twilio credentials not configured; contact submissions will only be logged");
        }

        let target_number = std::env::var("SMS_TARGET_NUMBER")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TARGET_NUMBER.to_string());

        Self::new(client, target_number)
    }

    pub fn new(client: Option<TwilioClient>, target_number: impl Into<String>) -> Self {
        Self {
            client,
            target_number: target_number.into(),
        }
    }

    /// Forward a validated submission. Single best-effort attempt.
    pub async fn forward(&self, submission: &Submission) -> Result<SmsOutcome, SmsError> {
        let body = notification_body(submission);

        match &self.client {
            Some(client) => {
                let to = format_e164(&self.target_number);
                let sid = client.send_sms(&to, &body).await?;
                info!(%sid, %to, "Contact submission forwarded via SMS");
                Ok(SmsOutcome::Sent { sid })
            }
            None => {
                info!(
                    name = %submission.name,
                    contact = %submission.contact,
                    message = %submission.message,
                    "Contact form submission (SMS not configured)"
                );
                Ok(SmsOutcome::Skipped)
            }
        }
    }
}

/// Fixed notification template embedding the submission's fields.
fn notification_body(submission: &Submission) -> String {
    format!(
        "New message from the J.A. Zepeda Plumbing contact form\n\
         Name: {}\n\
         Contact: {}\n\
         Message: {}",
        submission.name, submission.contact, submission.message
    )
}

/// Normalise a phone number to E.164: keep a leading `+`, otherwise strip
/// everything but digits and assume US (+1).
fn format_e164(number: &str) -> String {
    let trimmed = number.trim();
    if trimmed.starts_with('+') {
        return trimmed.to_string();
    }
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    format!("+1{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e164_keeps_existing_prefix() {
        assert_eq!(format_e164("+12103552804"), "+12103552804");
        assert_eq!(format_e164("  +447700900123 "), "+447700900123");
    }

    #[test]
    fn e164_strips_punctuation_and_adds_country_code() {
        assert_eq!(format_e164("210-355-2804"), "+12103552804");
        assert_eq!(format_e164("(682) 557-6617"), "+16825576617");
        assert_eq!(format_e164("210.555.0000"), "+12105550000");
    }

    #[test]
    fn notification_embeds_all_fields() {
        let submission = Submission {
            name: "Jane".into(),
            contact: "210-555-0000".into(),
            message: "Leak".into(),
        };
        let body = notification_body(&submission);
        assert!(body.contains("J.A. Zepeda Plumbing"));
        assert!(body.contains("Name: Jane"));
        assert!(body.contains("Contact: 210-555-0000"));
        assert!(body.contains("Message: Leak"));
    }
}
