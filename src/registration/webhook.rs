use anyhow::{Context, Result};
use reqwest::Client;
use std::{future::Future, pin::Pin};
use tracing::{debug, instrument};

use super::payload::NotificationPayload;

/// Outbound leg of the relay.
///
/// Implementations make a single attempt and report any failure (transport error,
/// non-2xx status) as `Err`; the relay does not look inside it.
pub trait WebhookSender: Send + Sync {
    fn deliver<'a>(
        &'a self,
        url: &'a str,
        payload: &'a NotificationPayload,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Posts payloads as JSON with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpWebhook {
    client: Client,
}

impl HttpWebhook {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend init).
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()
            .context("Error creating reqwest client")?;

        Ok(Self { client })
    }

    #[instrument(skip_all)]
    async fn post(&self, url: &str, payload: &NotificationPayload) -> Result<()> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .context("Error sending webhook request")?;

        let status = response.status();
        debug!("webhook responded with {}", status);

        response
            .error_for_status()
            .with_context(|| format!("Webhook rejected the notification: {status}"))?;

        Ok(())
    }
}

impl WebhookSender for HttpWebhook {
    fn deliver<'a>(
        &'a self,
        url: &'a str,
        payload: &'a NotificationPayload,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.post(url, payload))
    }
}
