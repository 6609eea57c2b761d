use crate::{
    api,
    cli::telemetry,
    registration::{EmbedStyle, HttpWebhook, Relay, RelayConfig, TracingLog},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub webhook_url: Option<SecretString>,
    pub embed: EmbedStyle,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the HTTP client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    if args.webhook_url.is_none() {
        warn!("WEBHOOK_URL is not set, every submission will be answered with an error");
    }

    let relay = Relay::new(
        RelayConfig::new(args.webhook_url, args.embed),
        Arc::new(HttpWebhook::new()?),
        Arc::new(TracingLog),
    );

    let result = api::new(args.port, Arc::new(relay)).await;

    telemetry::shutdown_tracer();

    result
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        (
            "webhook_url",
            args.webhook_url
                .as_ref()
                .map_or_else(|| "none".to_string(), redact_webhook),
        ),
        ("embed_title", args.embed.title.clone()),
        ("embed_color", format!("#{:06X}", args.embed.color)),
        ("thumbnail_url", args.embed.thumbnail_url.clone()),
    ];
    log_entries("Startup configuration", &entries);
}

// Webhook URLs embed their token in the path, only the origin is safe to print.
fn redact_webhook(url: &SecretString) -> String {
    match Url::parse(url.expose_secret()) {
        Ok(parsed) => format!("{}/REDACTED", parsed.origin().ascii_serialization()),
        Err(_) => "invalid-url".to_string(),
    }
}

fn log_entries(title: &str, entries: &[(&str, String)]) {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", roster_banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn roster_banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    ROSTER_BANNER.replace(
        "{VERSION}",
        &format!(" - {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

const ROSTER_BANNER: &str = r"
  +---------+
  | o  ---- |
  | o  ---- |  R O S T E R {VERSION}
  | o  ---- |
  +---------+";
