use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::RegistrationError;

/// What the registration page gets back for every submission.
///
/// Serializes to either `{"ok": true}` or
/// `{"error": true, "code": "...", "message": "..."}` with `code` omitted when unset.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResultDescriptor {
    Failure(Failure),
    Success(Success),
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Success {
    ok: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    message: String,
}

impl ResultDescriptor {
    #[must_use]
    pub fn ok() -> Self {
        Self::Success(Success { ok: true })
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failure(failure) => Some(&failure.message),
            Self::Success(_) => None,
        }
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Failure(failure) => failure.code.as_deref(),
            Self::Success(_) => None,
        }
    }
}

impl From<&RegistrationError> for ResultDescriptor {
    fn from(err: &RegistrationError) -> Self {
        Self::Failure(Failure {
            error: true,
            code: err.code().map(str::to_string),
            message: err.user_message().to_string(),
        })
    }
}
