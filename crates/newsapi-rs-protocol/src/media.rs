//! Media attachments delivered to the host alongside a function result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attachment the host renders next to the spoken or written answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Media {
    /// Clickable link to an external page.
    Link { url: String },
    /// Image to display inline.
    Image { url: String },
}

impl Media {
    /// Build a link attachment.
    pub fn link(url: impl Into<String>) -> Self {
        Self::Link { url: url.into() }
    }

    /// Build an image attachment.
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Target URL of the attachment.
    pub fn url(&self) -> &str {
        match self {
            Self::Link { url } | Self::Image { url } => url,
        }
    }

    /// Lowercase attachment kind, matching the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Link { .. } => "link",
            Self::Image { .. } => "image",
        }
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.url())
    }
}
