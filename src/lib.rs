//! Sharecard renders a fixed-size share card from structured video metadata.
//!
//! One render is a single unit of work:
//!
//! - Load the six external resources (thumbnail, avatar, QR asset, three
//!   font faces) behind a fail-fast join with a bounded wait and a
//!   cooperative [`CancelToken`]
//! - Wrap the title into at most two lines, truncating with an ellipsis
//! - Compose background, thumbnail, duration badge, circular avatar, title,
//!   metadata rows, and QR code in a fixed z-order onto a 1080x1014 CPU
//!   raster surface
//! - Export the surface as PNG bytes or a data URI
//!
//! ```no_run
//! # async fn demo(data: sharecard::VideoCardData) -> sharecard::CardResult<()> {
//! let mut engine = sharecard::CardEngine::new(sharecard::EngineConfig::default())?;
//! let cancel = sharecard::CancelToken::new();
//! let card = engine.render(&data, &cancel).await?;
//! let png = card.encode_png()?;
//! # let _ = png;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod engine;
mod foundation;
mod text;

/// Pure display-format transforms.
pub mod format;
/// Fixed card geometry and typography.
pub mod layout;
/// Input records for one render.
pub mod model;
/// Composition and surface readback.
pub mod render;

pub(crate) mod encode;

pub use crate::assets::fetch::{
    FONT_MONO_URL, FONT_REGULAR_URL, FONT_SEMI_BOLD_URL, FixedAssets, QR_ASSET_URL, RawResources,
    ResourceLoader, ResourceUrls,
};
pub use crate::engine::{CancelToken, CardEngine, DEFAULT_LOAD_TIMEOUT, EngineConfig};
pub use crate::foundation::core::{Canvas, Rgba8};
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::layout::LayoutSpec;
pub use crate::model::{ChannelThumbnailSet, Thumbnail, ThumbnailSet, VideoCardData};
pub use crate::render::{CardGeometry, RenderedCard};
pub use crate::text::{WrappedTitle, wrap_title};
