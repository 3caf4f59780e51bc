//! Fixed card geometry and typography.
//!
//! A [`LayoutSpec`] is built once, shared read-only behind an `Arc`, and
//! injected into the compositor. No render mutates it; alternate layouts
//! would coexist as separate values rather than global state.

use crate::foundation::core::{Canvas, Rect, Rgba8};

/// Which of the three registered faces a text region uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    /// Monospace face, used by the duration badge.
    Mono,
    /// Regular-weight face, used by the metadata rows.
    Regular,
    /// Semi-bold face, used by the title.
    SemiBold,
}

/// Typography attributes for one text region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Face selector.
    pub font: FontRole,
    /// Font size in pixels.
    pub size_px: f32,
    /// Fill color.
    pub color: Rgba8,
}

/// A fixed rectangular image region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageRegion {
    /// Left edge in canvas space.
    pub x: f64,
    /// Top edge in canvas space.
    pub y: f64,
    /// Region width in pixels.
    pub width: f64,
    /// Region height in pixels.
    pub height: f64,
}

impl ImageRegion {
    /// The region as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// A single-line text row at a fixed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRow {
    /// Left edge of the text.
    pub x: f64,
    /// Top edge of the text box at its base (unshifted) position.
    pub y: f64,
    /// Typography.
    pub style: TextStyle,
}

/// The wrapped title block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleRegion {
    /// Left edge of every title line.
    pub x: f64,
    /// Top edge of the first line.
    pub y: f64,
    /// Maximum line width in pixels; the wrap limit.
    pub max_width: f64,
    /// Maximum number of lines before ellipsis truncation.
    pub max_lines: usize,
    /// Vertical advance per line, and the offset unit applied to the
    /// metadata rows when the title takes two lines.
    pub line_height: f64,
    /// Typography.
    pub style: TextStyle,
}

/// The duration badge overlaying the thumbnail.
///
/// Width is not fixed: it derives from the measured duration text plus
/// horizontal padding on both sides, and the badge is anchored by its right
/// edge so longer strings grow it leftward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BadgeSpec {
    /// Canvas x-coordinate of the badge's right edge.
    pub right: f64,
    /// Top edge.
    pub y: f64,
    /// Fixed badge height.
    pub height: f64,
    /// Horizontal padding between text and each badge edge.
    pub pad_x: f64,
    /// Corner radius of the rounded rectangle.
    pub radius: f64,
    /// Badge fill color.
    pub fill: Rgba8,
    /// Label typography.
    pub style: TextStyle,
}

/// The circularly clipped avatar slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarSpec {
    /// Left edge of the square the avatar image scales into.
    pub x: f64,
    /// Top edge of that square.
    pub y: f64,
    /// Side length of the square; also the clip circle's diameter.
    pub size: f64,
}

impl AvatarSpec {
    /// Center of the clip circle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// Radius of the clip circle.
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    /// The square region the avatar image scales into.
    pub fn region(&self) -> ImageRegion {
        ImageRegion {
            x: self.x,
            y: self.y,
            width: self.size,
            height: self.size,
        }
    }
}

/// Complete, immutable card geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSpec {
    /// Output surface dimensions.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgba8,
    /// Main thumbnail region.
    pub thumbnail: ImageRegion,
    /// Duration badge.
    pub duration: BadgeSpec,
    /// Title block.
    pub title: TitleRegion,
    /// Avatar slot.
    pub avatar: AvatarSpec,
    /// Channel-name row.
    pub channel_name: TextRow,
    /// View-count row.
    pub views: TextRow,
    /// Publish-time row.
    pub published_at: TextRow,
    /// QR code region; never shifted by title wrapping.
    pub qrcode: ImageRegion,
}

const INK: Rgba8 = Rgba8::opaque(0x0f, 0x0f, 0x0f);
const MUTED: Rgba8 = Rgba8::opaque(0x60, 0x60, 0x60);

impl LayoutSpec {
    /// The share-card layout: a 1080x1014 canvas with a 16:9 thumbnail on
    /// top and the metadata block beneath it.
    pub fn share_card() -> Self {
        Self {
            canvas: Canvas {
                width: 1080,
                height: 1014,
            },
            background: Rgba8::opaque(255, 255, 255),
            thumbnail: ImageRegion {
                x: 0.0,
                y: 0.0,
                width: 1080.0,
                height: 608.0,
            },
            duration: BadgeSpec {
                right: 1056.0,
                y: 536.0,
                height: 48.0,
                pad_x: 12.0,
                radius: 8.0,
                fill: Rgba8::new(0, 0, 0, 204),
                style: TextStyle {
                    font: FontRole::Mono,
                    size_px: 28.0,
                    color: Rgba8::opaque(255, 255, 255),
                },
            },
            title: TitleRegion {
                x: 152.0,
                y: 648.0,
                max_width: 888.0,
                max_lines: 2,
                line_height: 56.0,
                style: TextStyle {
                    font: FontRole::SemiBold,
                    size_px: 42.0,
                    color: INK,
                },
            },
            avatar: AvatarSpec {
                x: 40.0,
                y: 648.0,
                size: 88.0,
            },
            channel_name: TextRow {
                x: 152.0,
                y: 772.0,
                style: TextStyle {
                    font: FontRole::Regular,
                    size_px: 28.0,
                    color: MUTED,
                },
            },
            views: TextRow {
                x: 152.0,
                y: 816.0,
                style: TextStyle {
                    font: FontRole::Regular,
                    size_px: 28.0,
                    color: MUTED,
                },
            },
            published_at: TextRow {
                x: 152.0,
                y: 860.0,
                style: TextStyle {
                    font: FontRole::Regular,
                    size_px: 28.0,
                    color: MUTED,
                },
            },
            qrcode: ImageRegion {
                x: 880.0,
                y: 814.0,
                width: 160.0,
                height: 160.0,
            },
        }
    }
}
