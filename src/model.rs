//! Input record for one card render.
//!
//! The shape mirrors the upstream metadata collaborator's JSON output
//! (camelCase keys, numeric counts carried as strings).

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CardError, CardResult};

/// One named thumbnail variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Source URL of the raster asset.
    pub url: String,
    /// Reported width in pixels.
    pub width: u32,
    /// Reported height in pixels.
    pub height: u32,
}

/// Named variants available for the main video thumbnail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSet {
    /// Smallest variant.
    #[serde(default)]
    pub default: Option<Thumbnail>,
    /// Medium variant.
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    /// High variant. Required; the compositor draws exactly this one.
    #[serde(default)]
    pub high: Option<Thumbnail>,
    /// Standard variant, not always present upstream.
    #[serde(default)]
    pub standard: Option<Thumbnail>,
    /// Maximum-resolution variant, not always present upstream.
    #[serde(default)]
    pub maxres: Option<Thumbnail>,
}

/// Named variants available for the channel avatar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelThumbnailSet {
    /// Default variant. Required; the compositor draws exactly this one.
    #[serde(default)]
    pub default: Option<Thumbnail>,
    /// Medium variant.
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    /// High variant.
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

/// Immutable metadata record for one render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCardData {
    /// Video title, wrapped into at most two lines on the card.
    pub title: String,
    /// Publish timestamp, RFC 3339.
    pub published_at: String,
    /// ISO 8601 duration, e.g. `PT1H2M3S`.
    pub duration: String,
    /// View count as a plain decimal digit string.
    pub view_count: String,
    /// Channel display name.
    pub channel_title: String,
    /// Main thumbnail variants.
    pub thumbnails: ThumbnailSet,
    /// Channel avatar variants.
    pub channel_thumbnails: ChannelThumbnailSet,
}

impl VideoCardData {
    /// Check the variant invariant before any loading starts.
    ///
    /// The compositor selects the `high` thumbnail and the `default` channel
    /// thumbnail and never falls back, so both must be present with a
    /// non-empty URL.
    pub fn validate(&self) -> CardResult<()> {
        let thumb = self
            .thumbnails
            .high
            .as_ref()
            .ok_or_else(|| CardError::validation("thumbnails.high variant is required"))?;
        if thumb.url.is_empty() {
            return Err(CardError::validation("thumbnails.high url must be non-empty"));
        }
        let avatar = self.channel_thumbnails.default.as_ref().ok_or_else(|| {
            CardError::validation("channelThumbnails.default variant is required")
        })?;
        if avatar.url.is_empty() {
            return Err(CardError::validation(
                "channelThumbnails.default url must be non-empty",
            ));
        }
        Ok(())
    }

    /// The thumbnail variant the card draws. Call [`Self::validate`] first.
    pub fn main_thumbnail(&self) -> CardResult<&Thumbnail> {
        self.thumbnails
            .high
            .as_ref()
            .ok_or_else(|| CardError::validation("thumbnails.high variant is required"))
    }

    /// The avatar variant the card draws. Call [`Self::validate`] first.
    pub fn avatar_thumbnail(&self) -> CardResult<&Thumbnail> {
        self.channel_thumbnails
            .default
            .as_ref()
            .ok_or_else(|| CardError::validation("channelThumbnails.default variant is required"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
