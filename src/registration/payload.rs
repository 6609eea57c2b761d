use serde::{Deserialize, Serialize};

use super::submission::Submission;

pub const DEFAULT_EMBED_TITLE: &str = "New Registration";
pub const DEFAULT_EMBED_COLOR: u32 = 10_181_046;
pub const DEFAULT_THUMBNAIL_URL: &str = "https://i.imgur.com/hP8Io2F.gif";

/// Presentation knobs for the embed; field labels are not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedStyle {
    pub title: String,
    pub color: u32,
    pub thumbnail_url: String,
}

impl Default for EmbedStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_EMBED_TITLE.to_string(),
            color: DEFAULT_EMBED_COLOR,
            thumbnail_url: DEFAULT_THUMBNAIL_URL.to_string(),
        }
    }
}

/// Body posted to the webhook, matching the embeds schema it accepts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    embeds: Vec<Embed>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub thumbnail: Thumbnail,
    pub fields: Vec<EmbedField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

impl EmbedField {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl NotificationPayload {
    #[must_use]
    pub fn new(submission: &Submission, style: &EmbedStyle) -> Self {
        let embed = Embed {
            title: style.title.clone(),
            color: style.color,
            thumbnail: Thumbnail {
                url: style.thumbnail_url.clone(),
            },
            fields: vec![
                EmbedField::new("Organization", &submission.organization),
                EmbedField::new("Name", &submission.name),
                EmbedField::new("ID", &submission.id),
                EmbedField::new("Phone", &submission.phone),
            ],
        };

        Self {
            embeds: vec![embed],
        }
    }

    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }
}
