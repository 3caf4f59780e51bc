pub(crate) mod compositor;
pub(crate) mod surface;

use crate::encode;
use crate::foundation::core::Rect;
use crate::foundation::error::CardResult;

/// Geometry actually used by one composed card.
///
/// Exists so callers (and tests) can observe the wrap/offset decisions
/// without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardGeometry {
    /// Title lines drawn (0, 1 or 2).
    pub title_lines: u32,
    /// Vertical shift applied to the metadata rows, in pixels. One
    /// line-height unit when the title wrapped to two lines, else zero.
    pub metadata_offset: f64,
    /// Final duration-badge rectangle, sized from the measured label.
    pub badge: Rect,
}

/// A finished card surface.
///
/// Fixed-size premultiplied RGBA8 pixels plus the geometry report.
/// Immutable once produced.
#[derive(Debug)]
pub struct RenderedCard {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixel bytes.
    pub data: Vec<u8>,
    /// Layout decisions taken while composing.
    pub geometry: CardGeometry,
}

impl RenderedCard {
    /// Serialize the surface as PNG bytes.
    pub fn encode_png(&self) -> CardResult<Vec<u8>> {
        encode::png::encode_png(self.width, self.height, &self.data)
    }

    /// Serialize the surface as a `data:image/png;base64,` URI.
    pub fn to_data_uri(&self) -> CardResult<String> {
        Ok(encode::png::to_data_uri(&self.encode_png()?))
    }
}
