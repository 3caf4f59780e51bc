//! Concurrent acquisition of the six per-render resources.
//!
//! Three images (thumbnail, avatar, the fixed QR asset) and three font
//! faces are fetched together behind a fail-fast join: the first failure
//! aborts the whole loading phase, the bounded wait elapses into a timeout
//! error, and a cancel token is honored at the join boundary.

use std::time::Duration;

use crate::engine::CancelToken;
use crate::foundation::error::{CardError, CardResult};
use crate::model::VideoCardData;

/// Fixed QR-code asset drawn in the card's bottom-right corner.
pub const QR_ASSET_URL: &str = "https://assets.sharecard.dev/qr/watch-link.png";

/// Fixed monospace face used by the duration badge.
pub const FONT_MONO_URL: &str =
    "https://cdn.jsdelivr.net/fontsource/fonts/roboto-mono@latest/latin-500-normal.ttf";

/// Fixed regular-weight face used by the metadata rows.
pub const FONT_REGULAR_URL: &str =
    "https://cdn.jsdelivr.net/fontsource/fonts/roboto@latest/latin-400-normal.ttf";

/// Fixed semi-bold face used by the title.
pub const FONT_SEMI_BOLD_URL: &str =
    "https://cdn.jsdelivr.net/fontsource/fonts/roboto@latest/latin-600-normal.ttf";

/// Responses above this size are refused rather than buffered.
const MAX_RESOURCE_BYTES: usize = 8 * 1024 * 1024;

/// Engine-constant asset locations.
///
/// These are not caller inputs; the defaults are the engine's fixed
/// constants and an override only exists so hermetic tests can point at a
/// local fixture server.
#[derive(Clone, Debug)]
pub struct FixedAssets {
    /// QR-code image URL.
    pub qrcode_url: String,
    /// Monospace font URL.
    pub font_mono_url: String,
    /// Regular font URL.
    pub font_regular_url: String,
    /// Semi-bold font URL.
    pub font_semi_bold_url: String,
}

impl Default for FixedAssets {
    fn default() -> Self {
        Self {
            qrcode_url: QR_ASSET_URL.to_string(),
            font_mono_url: FONT_MONO_URL.to_string(),
            font_regular_url: FONT_REGULAR_URL.to_string(),
            font_semi_bold_url: FONT_SEMI_BOLD_URL.to_string(),
        }
    }
}

/// The six source URLs for one render.
#[derive(Clone, Debug)]
pub struct ResourceUrls {
    /// Main thumbnail, always the `high` variant.
    pub thumbnail: String,
    /// Channel avatar, always the `default` variant.
    pub avatar: String,
    /// QR asset.
    pub qrcode: String,
    /// Monospace font.
    pub font_mono: String,
    /// Regular font.
    pub font_regular: String,
    /// Semi-bold font.
    pub font_semi_bold: String,
}

impl ResourceUrls {
    /// Resolve the URL set for a validated record plus the engine constants.
    pub fn for_card(data: &VideoCardData, fixed: &FixedAssets) -> CardResult<Self> {
        Ok(Self {
            thumbnail: data.main_thumbnail()?.url.clone(),
            avatar: data.avatar_thumbnail()?.url.clone(),
            qrcode: fixed.qrcode_url.clone(),
            font_mono: fixed.font_mono_url.clone(),
            font_regular: fixed.font_regular_url.clone(),
            font_semi_bold: fixed.font_semi_bold_url.clone(),
        })
    }
}

/// Raw fetched bytes for the six resources, pre-decode.
#[derive(Clone, Debug)]
pub struct RawResources {
    /// Encoded thumbnail image.
    pub thumbnail: Vec<u8>,
    /// Encoded avatar image.
    pub avatar: Vec<u8>,
    /// Encoded QR image.
    pub qrcode: Vec<u8>,
    /// Monospace font bytes.
    pub font_mono: Vec<u8>,
    /// Regular font bytes.
    pub font_regular: Vec<u8>,
    /// Semi-bold font bytes.
    pub font_semi_bold: Vec<u8>,
}

/// HTTP loader with a bounded all-or-nothing join.
#[derive(Clone, Debug)]
pub struct ResourceLoader {
    client: reqwest::Client,
    timeout: Duration,
}

impl ResourceLoader {
    /// Build a loader whose join phase is bounded by `timeout`.
    pub fn new(timeout: Duration) -> CardResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CardError::resource(format!("failed to build http client: {e}")))?;
        Ok(Self { client, timeout })
    }

    /// Fetch all six resources concurrently.
    ///
    /// The join is all-or-nothing: the first fetch error propagates
    /// immediately and the remaining in-flight requests are dropped. The
    /// whole phase races the configured timeout and the caller's cancel
    /// token; no draw work happens on any failure path.
    #[tracing::instrument(skip_all)]
    pub async fn load(
        &self,
        urls: &ResourceUrls,
        cancel: &CancelToken,
    ) -> CardResult<RawResources> {
        if cancel.is_cancelled() {
            return Err(CardError::Cancelled);
        }

        let join = async {
            tokio::try_join!(
                self.fetch_bytes(&urls.thumbnail),
                self.fetch_bytes(&urls.avatar),
                self.fetch_bytes(&urls.qrcode),
                self.fetch_bytes(&urls.font_mono),
                self.fetch_bytes(&urls.font_regular),
                self.fetch_bytes(&urls.font_semi_bold),
            )
        };

        let (thumbnail, avatar, qrcode, font_mono, font_regular, font_semi_bold) = tokio::select! {
            _ = cancel.cancelled() => return Err(CardError::Cancelled),
            joined = tokio::time::timeout(self.timeout, join) => {
                joined.map_err(|_| CardError::Timeout(self.timeout))??
            }
        };

        tracing::debug!(
            thumbnail = thumbnail.len(),
            avatar = avatar.len(),
            qrcode = qrcode.len(),
            "all resources fetched"
        );
        Ok(RawResources {
            thumbnail,
            avatar,
            qrcode,
            font_mono,
            font_regular,
            font_semi_bold,
        })
    }

    async fn fetch_bytes(&self, url: &str) -> CardResult<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CardError::resource(format!("fetch '{url}': {e}")))?
            .error_for_status()
            .map_err(|e| CardError::resource(format!("fetch '{url}': {e}")))?;

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CardError::resource(format!("read body of '{url}': {e}")))?;
        if bytes.len() > MAX_RESOURCE_BYTES {
            return Err(CardError::resource(format!(
                "resource '{url}' exceeds {MAX_RESOURCE_BYTES} bytes"
            )));
        }
        tracing::debug!(url, bytes = bytes.len(), "resource fetched");
        Ok(bytes.to_vec())
    }
}
