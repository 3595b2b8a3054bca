//! Notification dispatcher for the studio: reservation confirmations and
//! mailing-list broadcasts through the Resend HTTP API.
//!
//! Delivery is best-effort by design. A booking is the authoritative business
//! event; a failed or skipped email never rolls it back, so callers treat
//! every non-`Sent` result as ignorable for the primary operation.

pub mod mock;
pub mod template;

use eyre::{eyre, Result};
use serde_json::json;

const RESEND_API_BASE: &str = "https://api.resend.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    /// Accepted by the provider.
    Sent,
    /// Provider credential absent; delivery skipped with a warning.
    Skipped,
}

/// Thin client over the provider. Constructed once at startup and shared
/// through application state.
#[derive(Debug, Clone)]
pub struct Mailer {
    api_key: Option<String>,
    from_address: String,
    client: reqwest::Client,
}

impl Mailer {
    pub fn new(api_key: Option<String>, from_address: impl Into<String>) -> Self {
        Self {
            api_key,
            from_address: from_address.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends a single transactional email. An unconfigured provider degrades
    /// to a logged warning and `Skipped`; a provider-reported error is
    /// returned as an error for the caller to log and swallow.
    pub async fn send_one(&self, to: &str, subject: &str, html: &str) -> Result<SendStatus> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("mail provider API key not set; skipping email to {}", to);
            return Ok(SendStatus::Skipped);
        };

        let response = self
            .client
            .post(format!("{RESEND_API_BASE}/emails"))
            .bearer_auth(api_key)
            .json(&json!({
                "from": self.from_address,
                "to": to,
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(SendStatus::Sent)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("mail provider rejected send: status={}, body={}", status, body);
            Err(eyre!("mail provider returned {status}"))
        }
    }

    /// Sends one message per address as a single batch call. Plain-text body
    /// lines are converted to paragraph blocks. Any provider-reported error
    /// fails the whole batch; there is no per-recipient accounting.
    pub async fn send_batch(
        &self,
        addresses: &[String],
        subject: &str,
        body: &str,
    ) -> Result<SendStatus> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!(
                "mail provider API key not set; skipping broadcast to {} recipients",
                addresses.len()
            );
            return Ok(SendStatus::Skipped);
        };

        let html = template::body_to_html(body);
        let messages: Vec<_> = addresses
            .iter()
            .map(|to| {
                json!({
                    "from": self.from_address,
                    "to": to,
                    "subject": subject,
                    "html": html,
                })
            })
            .collect();

        let response = self
            .client
            .post(format!("{RESEND_API_BASE}/emails/batch"))
            .bearer_auth(api_key)
            .json(&messages)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(SendStatus::Sent)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "mail provider rejected broadcast: status={}, body={}",
                status,
                body
            );
            Err(eyre!("mail provider returned {status}"))
        }
    }
}
