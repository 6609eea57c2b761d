use tracing::{error, info, warn};

use super::{error::RegistrationError, submission::RawSubmission, submission::Submission};

/// Diagnostic side channel for the relay.
///
/// `received` fires for every request before any check runs, so even incomplete forms
/// leave a trace. Exactly one of `delivered` or `rejected` follows.
pub trait SubmissionLog: Send + Sync {
    fn received(&self, raw: &RawSubmission);
    fn delivered(&self, submission: &Submission);
    fn rejected(&self, error: &RegistrationError);
}

/// Default sink, writes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl SubmissionLog for TracingLog {
    fn received(&self, raw: &RawSubmission) {
        info!(
            org = ?raw.org,
            name = ?raw.name,
            id = ?raw.id,
            phone = ?raw.phone,
            "registration received"
        );
    }

    fn delivered(&self, submission: &Submission) {
        info!(
            org = %submission.organization,
            id = %submission.id,
            "registration delivered to webhook"
        );
    }

    fn rejected(&self, error: &RegistrationError) {
        match error {
            RegistrationError::ValidationFailed { .. } => warn!("{error}"),
            RegistrationError::ConfigurationMissing | RegistrationError::DeliveryFailed(_) => {
                error!("{error}");
            }
        }
    }
}
