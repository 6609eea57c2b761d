use crate::cli::{
    actions::{server::Args, Action},
    commands::webhook,
};
use crate::registration::EmbedStyle;
use anyhow::{Context, Result};
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let webhook_url = matches
        .get_one::<String>(webhook::ARG_WEBHOOK_URL)
        .filter(|url| !url.is_empty())
        .map(|url| SecretString::from(url.as_str()));

    let title = matches
        .get_one::<String>(webhook::ARG_EMBED_TITLE)
        .cloned()
        .context("missing argument: --embed-title")?;
    let color = matches
        .get_one::<u32>(webhook::ARG_EMBED_COLOR)
        .copied()
        .context("missing argument: --embed-color")?;
    let thumbnail_url = matches
        .get_one::<String>(webhook::ARG_THUMBNAIL_URL)
        .cloned()
        .context("missing argument: --thumbnail-url")?;

    Ok(Action::Server(Args {
        port,
        webhook_url,
        embed: EmbedStyle {
            title,
            color,
            thumbnail_url,
        },
    }))
}
