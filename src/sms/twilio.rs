//! Thin client for Twilio's Messages API.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::SmsError;

const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Twilio credentials, built from environment variables.
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: SecretString,
    pub from_number: String,
}

impl TwilioConfig {
    /// Build config from environment variables.
    /// Returns `None` if any credential is missing or empty (SMS disabled).
    pub fn from_env() -> Option<Self> {
        let account_sid = non_empty_var("TWILIO_ACCOUNT_SID")?;
        let auth_token = non_empty_var("TWILIO_AUTH_TOKEN")?;
        let from_number = non_empty_var("TWILIO_PHONE_NUMBER")?;

        Some(Self {
            account_sid,
            auth_token: SecretString::from(auth_token),
            from_number,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Successful Messages API response (only the field we use).
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// Twilio Messages API client. One best-effort send per call, no retry.
pub struct TwilioClient {
    config: TwilioConfig,
    client: reqwest::Client,
    base_url: String,
}

impl TwilioClient {
    pub fn new(config: TwilioConfig) -> Self {
        Self::with_base_url(config, TWILIO_API_BASE)
    }

    /// Point the client at an alternate API host (used by tests).
    pub fn with_base_url(config: TwilioConfig, base_url: impl Into<String>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.config.account_sid
        )
    }

    /// Send a single SMS, returning the Twilio message SID.
    pub async fn send_sms(&self, to: &str, body: &str) -> Result<String, SmsError> {
        let params = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", body),
        ];

        let resp = self
            .client
            .post(self.messages_url())
            .basic_auth(
                &self.config.account_sid,
                Some(self.config.auth_token.expose_secret()),
            )
            .form(&params)
            .send()
            .await
            .map_err(|e| SmsError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SmsError::SendFailed {
                status: status.as_u16(),
                body,
            });
        }

        let message: MessageResource = resp
            .json()
            .await
            .map_err(|e| SmsError::InvalidResponse(e.to_string()))?;

        Ok(message.sid)
    }
}
