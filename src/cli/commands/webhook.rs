use crate::registration::payload::{DEFAULT_EMBED_TITLE, DEFAULT_THUMBNAIL_URL};
use clap::{builder::ValueParser, Arg, Command};
use url::Url;

pub const ARG_WEBHOOK_URL: &str = "webhook-url";
pub const ARG_EMBED_TITLE: &str = "embed-title";
pub const ARG_EMBED_COLOR: &str = "embed-color";
pub const ARG_THUMBNAIL_URL: &str = "thumbnail-url";

// Same value as `DEFAULT_EMBED_COLOR`, clap defaults must be static strings.
const DEFAULT_EMBED_COLOR_ARG: &str = "10181046";

fn parse_http_url(value: &str) -> std::result::Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        scheme => Err(format!("unsupported scheme: {scheme}")),
    }
}

/// Accept only absolute http(s) URLs, keep the original string.
#[must_use]
pub fn validator_http_url() -> ValueParser {
    ValueParser::from(move |value: &str| parse_http_url(value))
}

/// Like [`validator_http_url`], but a blank value (`WEBHOOK_URL=`) parses to an empty
/// string that dispatch treats as unset.
#[must_use]
pub fn validator_webhook_url() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<String, String> {
        if value.trim().is_empty() {
            return Ok(String::new());
        }
        parse_http_url(value)
    })
}

/// Embed colors as decimal (`10181046`) or hex (`#9B59B6`, `0x9B59B6`).
#[must_use]
pub fn validator_color() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<u32, String> {
        let value = value.trim();
        let hex = value
            .strip_prefix('#')
            .or_else(|| value.strip_prefix("0x"))
            .or_else(|| value.strip_prefix("0X"));

        let color = match hex {
            Some(digits) => u32::from_str_radix(digits, 16),
            None => value.parse::<u32>(),
        }
        .map_err(|e| format!("invalid color: {e}"))?;

        if color > 0x00FF_FFFF {
            return Err("color must fit in 24 bits (0xFFFFFF)".to_string());
        }

        Ok(color)
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_WEBHOOK_URL)
                .long(ARG_WEBHOOK_URL)
                .help("Webhook URL receiving registrations; submissions fail with an error until set")
                .env("WEBHOOK_URL")
                .hide_env_values(true)
                .value_parser(validator_webhook_url()),
        )
        .arg(
            Arg::new(ARG_EMBED_TITLE)
                .long(ARG_EMBED_TITLE)
                .help("Title of the notification embed")
                .env("ROSTER_EMBED_TITLE")
                .default_value(DEFAULT_EMBED_TITLE),
        )
        .arg(
            Arg::new(ARG_EMBED_COLOR)
                .long(ARG_EMBED_COLOR)
                .help("Embed color, decimal or hex (#RRGGBB)")
                .env("ROSTER_EMBED_COLOR")
                .default_value(DEFAULT_EMBED_COLOR_ARG)
                .value_parser(validator_color()),
        )
        .arg(
            Arg::new(ARG_THUMBNAIL_URL)
                .long(ARG_THUMBNAIL_URL)
                .help("Thumbnail image shown in the embed")
                .env("ROSTER_THUMBNAIL_URL")
                .default_value(DEFAULT_THUMBNAIL_URL)
                .value_parser(validator_http_url()),
        )
}
