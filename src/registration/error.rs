use thiserror::Error;

pub const MESSAGE_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
pub const MESSAGE_SENDING_DATA: &str =
    "An unexpected error occurred while sending your data. Please try again!";
pub const CODE_WEBHOOK_URL_MISSING: &str = "WEBHOOK_URL is missing";

/// Everything that can stop a submission from reaching the webhook.
///
/// The `Display` output is internal and meant for logs. Callers only ever see
/// [`RegistrationError::user_message`] and, for configuration problems,
/// [`RegistrationError::code`].
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("webhook URL is not configured")]
    ConfigurationMissing,
    #[error("submission is missing required fields: {}", .missing.join(", "))]
    ValidationFailed { missing: Vec<&'static str> },
    #[error("webhook delivery failed: {0:#}")]
    DeliveryFailed(anyhow::Error),
}

impl RegistrationError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing | Self::DeliveryFailed(_) => MESSAGE_UNEXPECTED,
            Self::ValidationFailed { .. } => MESSAGE_SENDING_DATA,
        }
    }

    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::ConfigurationMissing => Some(CODE_WEBHOOK_URL_MISSING),
            Self::ValidationFailed { .. } | Self::DeliveryFailed(_) => None,
        }
    }
}
