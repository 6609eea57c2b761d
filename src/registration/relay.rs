use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::instrument;

use super::{
    error::RegistrationError,
    log::SubmissionLog,
    outcome::ResultDescriptor,
    payload::{EmbedStyle, NotificationPayload},
    submission::{RawSubmission, Submission},
    webhook::WebhookSender,
};

/// Everything the relay needs to know up front.
///
/// A missing webhook URL is allowed here and only surfaces when a submission arrives.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    webhook_url: Option<SecretString>,
    embed: EmbedStyle,
}

impl RelayConfig {
    #[must_use]
    pub fn new(webhook_url: Option<SecretString>, embed: EmbedStyle) -> Self {
        Self { webhook_url, embed }
    }

    #[must_use]
    pub fn webhook_url(&self) -> Option<&SecretString> {
        self.webhook_url.as_ref()
    }

    #[must_use]
    pub fn embed(&self) -> &EmbedStyle {
        &self.embed
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }
}

/// Validates one submission and forwards it to the configured webhook.
pub struct Relay {
    config: RelayConfig,
    sender: Arc<dyn WebhookSender>,
    log: Arc<dyn SubmissionLog>,
}

impl Relay {
    #[must_use]
    pub fn new(
        config: RelayConfig,
        sender: Arc<dyn WebhookSender>,
        log: Arc<dyn SubmissionLog>,
    ) -> Self {
        Self {
            config,
            sender,
            log,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run a submission through configuration, validation and delivery.
    ///
    /// Never fails: every error becomes a [`ResultDescriptor`] with a generic message.
    #[instrument(skip_all)]
    pub async fn submit(&self, raw: RawSubmission) -> ResultDescriptor {
        match self.forward(raw).await {
            Ok(submission) => {
                self.log.delivered(&submission);
                ResultDescriptor::ok()
            }
            Err(err) => {
                self.log.rejected(&err);
                ResultDescriptor::from(&err)
            }
        }
    }

    async fn forward(&self, raw: RawSubmission) -> Result<Submission, RegistrationError> {
        self.log.received(&raw);

        let url = self
            .config
            .webhook_url()
            .ok_or(RegistrationError::ConfigurationMissing)?;

        let submission = Submission::try_from(raw)?;
        let payload = NotificationPayload::new(&submission, self.config.embed());

        self.sender
            .deliver(url.expose_secret(), &payload)
            .await
            .map_err(RegistrationError::DeliveryFailed)?;

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::error::{MESSAGE_SENDING_DATA, MESSAGE_UNEXPECTED};
    use anyhow::{anyhow, Result};
    use std::{future::Future, pin::Pin, sync::Mutex};

    #[derive(Default)]
    struct RecordingSender {
        calls: Mutex<Vec<(String, NotificationPayload)>>,
        fail: bool,
    }

    impl RecordingSender {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(String, NotificationPayload)> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }
    }

    impl WebhookSender for RecordingSender {
        fn deliver<'a>(
            &'a self,
            url: &'a str,
            payload: &'a NotificationPayload,
        ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
            Box::pin(async move {
                if let Ok(mut calls) = self.calls.lock() {
                    calls.push((url.to_string(), payload.clone()));
                }
                if self.fail {
                    Err(anyhow!("connection reset by peer"))
                } else {
                    Ok(())
                }
            })
        }
    }

    #[derive(Default)]
    struct RecordingLog {
        events: Mutex<Vec<String>>,
    }

    impl RecordingLog {
        fn push(&self, event: String) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().map(|e| e.clone()).unwrap_or_default()
        }
    }

    impl SubmissionLog for RecordingLog {
        fn received(&self, raw: &RawSubmission) {
            self.push(format!("received {:?}", raw.org));
        }

        fn delivered(&self, submission: &Submission) {
            self.push(format!("delivered {}", submission.organization));
        }

        fn rejected(&self, error: &RegistrationError) {
            self.push(format!("rejected {error}"));
        }
    }

    const URL: &str = "https://discord.test/api/webhooks/1/token";

    fn relay(
        url: Option<&str>,
        sender: &Arc<RecordingSender>,
        log: &Arc<RecordingLog>,
    ) -> Relay {
        let config = RelayConfig::new(url.map(SecretString::from), EmbedStyle::default());
        Relay::new(config, sender.clone(), log.clone())
    }

    fn raw(org: &str, name: &str, id: &str, phone: &str) -> RawSubmission {
        RawSubmission {
            org: Some(org.to_string()),
            name: Some(name.to_string()),
            id: Some(id.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    #[tokio::test]
    async fn complete_submission_is_delivered_once() {
        let sender = Arc::new(RecordingSender::default());
        let log = Arc::new(RecordingLog::default());
        let relay = relay(Some(URL), &sender, &log);

        let result = relay
            .submit(raw("Bahamas", "Joao", "123", "5511999999999"))
            .await;
        assert_eq!(result, ResultDescriptor::ok());

        let calls = sender.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, URL);

        let values: Vec<&str> = calls[0].1.embeds()[0]
            .fields
            .iter()
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(values, ["Bahamas", "Joao", "123", "5511999999999"]);

        assert_eq!(
            log.events(),
            vec![
                "received Some(\"Bahamas\")".to_string(),
                "delivered Bahamas".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn any_missing_field_skips_delivery() {
        let complete = raw("Bahamas", "Joao", "123", "555");
        let variants = [
            RawSubmission {
                org: None,
                ..complete.clone()
            },
            RawSubmission {
                name: Some(String::new()),
                ..complete.clone()
            },
            RawSubmission {
                id: None,
                ..complete.clone()
            },
            RawSubmission {
                phone: Some(String::new()),
                ..complete.clone()
            },
        ];

        for variant in variants {
            let sender = Arc::new(RecordingSender::default());
            let log = Arc::new(RecordingLog::default());
            let relay = relay(Some(URL), &sender, &log);

            let result = relay.submit(variant).await;
            assert!(!result.is_ok());
            assert_eq!(result.message(), Some(MESSAGE_SENDING_DATA));
            assert_eq!(result.code(), None);
            assert!(sender.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn empty_org_reports_sending_data_message() {
        let sender = Arc::new(RecordingSender::default());
        let log = Arc::new(RecordingLog::default());
        let relay = relay(Some(URL), &sender, &log);

        let result = relay.submit(raw("", "Joao", "123", "555")).await;
        assert_eq!(
            result.message(),
            Some("An unexpected error occurred while sending your data. Please try again!")
        );
        assert!(sender.calls().is_empty());

        // Logged on receipt even though the form is incomplete.
        let events = log.events();
        assert_eq!(events[0], "received Some(\"\")");
        assert_eq!(
            events[1],
            "rejected submission is missing required fields: org"
        );
    }

    #[tokio::test]
    async fn missing_webhook_url_wins_over_validation() {
        let sender = Arc::new(RecordingSender::default());
        let log = Arc::new(RecordingLog::default());
        let relay = relay(None, &sender, &log);

        for submission in [
            raw("Bahamas", "Joao", "123", "555"),
            RawSubmission::default(),
        ] {
            let result = relay.submit(submission).await;
            assert_eq!(result.code(), Some("WEBHOOK_URL is missing"));
            assert_eq!(result.message(), Some(MESSAGE_UNEXPECTED));
        }
        assert!(sender.calls().is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_is_generic() {
        let sender = Arc::new(RecordingSender::failing());
        let log = Arc::new(RecordingLog::default());
        let relay = relay(Some(URL), &sender, &log);

        let result = relay.submit(raw("Bahamas", "Joao", "123", "555")).await;
        assert_eq!(result.message(), Some(MESSAGE_UNEXPECTED));
        assert_eq!(result.code(), None);
        assert_eq!(sender.calls().len(), 1);
        assert_eq!(
            log.events().last().map(String::as_str),
            Some("rejected webhook delivery failed: connection reset by peer")
        );
    }

    #[test]
    fn config_reports_configuration_state() {
        assert!(!RelayConfig::default().is_configured());
        let config = RelayConfig::new(Some(SecretString::from(URL)), EmbedStyle::default());
        assert!(config.is_configured());
        assert_eq!(config.embed().color, 10_181_046);
    }
}
