//! # Roster
//!
//! `roster` serves a single registration page and relays each submitted form to a
//! messaging webhook as an embed notification. Nothing is persisted: a submission lives
//! for exactly one request.
//!
//! ## Request flow
//!
//! 1. `POST /` decodes the form into a [`registration::RawSubmission`].
//! 2. [`registration::Relay`] checks that a webhook is configured, that all four fields
//!    are present, builds the [`registration::NotificationPayload`] and posts it once.
//! 3. The caller always receives a [`registration::ResultDescriptor`] as JSON, either
//!    `{"ok": true}` or `{"error": true, "message": ...}`.
//!
//! Failures never escape the relay; they are folded into a generic user-facing message
//! and reported to the injected [`registration::SubmissionLog`].

pub mod api;
pub mod cli;
pub mod registration;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
