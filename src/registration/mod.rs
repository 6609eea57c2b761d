pub mod error;
pub use self::error::RegistrationError;

pub mod log;
pub use self::log::{SubmissionLog, TracingLog};

pub mod outcome;
pub use self::outcome::ResultDescriptor;

pub mod payload;
pub use self::payload::{EmbedStyle, NotificationPayload};

pub mod relay;
pub use self::relay::{Relay, RelayConfig};

pub mod submission;
pub use self::submission::{RawSubmission, Submission};

pub mod webhook;
pub use self::webhook::{HttpWebhook, WebhookSender};
