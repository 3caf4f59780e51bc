//! Sequential draw of one card onto a CPU raster surface.
//!
//! Draw order is fixed: background, thumbnail, duration badge, clipped
//! avatar, title, metadata rows, QR code. Every draw call sets its own
//! transform and paint immediately beforehand; the avatar clip is pushed
//! and popped around exactly one image draw so it cannot leak into later
//! operations. Nothing in this module suspends.

use chrono::{DateTime, Utc};
use kurbo::Shape;

use crate::assets::decode::PreparedImage;
use crate::assets::store::{FontSet, ResourceSet};
use crate::foundation::core::{Affine, Circle, Rect, RoundedRect};
use crate::foundation::error::{CardError, CardResult};
use crate::format::{format_duration, format_relative_time_at, format_view_count};
use crate::layout::{FontRole, LayoutSpec, TextRow, TextStyle};
use crate::model::VideoCardData;
use crate::render::surface::{affine_to_cpu, color_to_cpu, fit_region_transform, image_paint};
use crate::render::{CardGeometry, RenderedCard};
use crate::text::{RegisteredFont, TextBrushRgba8, TextEngine, wrap_title};

/// Flattening tolerance when converting shapes to bezier paths.
const PATH_TOLERANCE: f64 = 0.1;

/// One-shot compositor borrowing the shared layout and the text engine.
pub(crate) struct Compositor<'a> {
    layout: &'a LayoutSpec,
    text: &'a mut TextEngine,
}

impl<'a> Compositor<'a> {
    pub(crate) fn new(layout: &'a LayoutSpec, text: &'a mut TextEngine) -> Self {
        Self { layout, text }
    }

    /// Draw the full card and read the surface back.
    #[tracing::instrument(skip_all)]
    pub(crate) fn compose(
        &mut self,
        data: &VideoCardData,
        resources: &ResourceSet,
        now: DateTime<Utc>,
    ) -> CardResult<RenderedCard> {
        let width = self.layout.canvas.width;
        let height = self.layout.canvas.height;
        let w: u16 = width
            .try_into()
            .map_err(|_| CardError::measurement("canvas width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| CardError::measurement("canvas height exceeds u16"))?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);

        self.draw_background(&mut ctx);
        self.draw_image(&mut ctx, &resources.thumbnail, self.layout.thumbnail.rect())?;
        let badge = self.draw_duration_badge(&mut ctx, &data.duration, &resources.fonts)?;
        self.draw_avatar(&mut ctx, &resources.avatar)?;
        let title_lines = self.draw_title(&mut ctx, &data.title, &resources.fonts)?;

        let metadata_offset = if title_lines >= 2 {
            self.layout.title.line_height
        } else {
            0.0
        };
        self.draw_row(
            &mut ctx,
            &data.channel_title,
            self.layout.channel_name,
            metadata_offset,
            &resources.fonts,
        )?;
        self.draw_row(
            &mut ctx,
            &format_view_count(&data.view_count),
            self.layout.views,
            metadata_offset,
            &resources.fonts,
        )?;
        self.draw_row(
            &mut ctx,
            &format_relative_time_at(&data.published_at, now),
            self.layout.published_at,
            metadata_offset,
            &resources.fonts,
        )?;
        self.draw_image(&mut ctx, &resources.qrcode, self.layout.qrcode.rect())?;

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        tracing::debug!(title_lines, metadata_offset, "card composed");
        Ok(RenderedCard {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
            geometry: CardGeometry {
                title_lines,
                metadata_offset,
                badge,
            },
        })
    }

    fn draw_background(&self, ctx: &mut vello_cpu::RenderContext) {
        let c = self.layout.canvas;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(self.layout.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            c.width as f64,
            c.height as f64,
        ));
    }

    fn draw_image(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        img: &PreparedImage,
        region: Rect,
    ) -> CardResult<()> {
        let paint = image_paint(img)?;
        let tr = fit_region_transform(img.width, img.height, region);
        ctx.set_transform(affine_to_cpu(tr));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            img.width as f64,
            img.height as f64,
        ));
        Ok(())
    }

    /// Rounded badge sized from the measured label, anchored on its right
    /// edge so a longer duration grows it leftward.
    fn draw_duration_badge(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        duration_iso: &str,
        fonts: &FontSet,
    ) -> CardResult<Rect> {
        let spec = self.layout.duration;
        let label = format_duration(duration_iso);
        let font = font_for(fonts, spec.style.font);
        let layout = self.text.layout_line(
            &label,
            font,
            spec.style.size_px,
            brush_for(spec.style),
        )?;
        let text_w = layout.full_width() as f64;
        let text_h = layout.height() as f64;

        let x1 = spec.right;
        let x0 = x1 - (text_w + 2.0 * spec.pad_x);
        let rect = Rect::new(x0, spec.y, x1, spec.y + spec.height);

        let rr = RoundedRect::from_rect(rect, spec.radius);
        let mut path = vello_cpu::kurbo::BezPath::new();
        for el in rr.path_elements(PATH_TOLERANCE) {
            path.push(el);
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(spec.fill));
        ctx.fill_path(&path);

        // Center the label inside the badge.
        let text_x = x0 + spec.pad_x;
        let text_y = spec.y + (spec.height - text_h) / 2.0;
        draw_layout(ctx, &layout, font, Affine::translate((text_x, text_y)));
        Ok(rect)
    }

    /// Avatar clipped to a circle; the clip is popped before returning so
    /// no later draw inherits it.
    fn draw_avatar(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        avatar: &PreparedImage,
    ) -> CardResult<()> {
        let spec = self.layout.avatar;
        let (cx, cy) = spec.center();
        let circle = Circle::new((cx, cy), spec.radius());
        let mut clip = vello_cpu::kurbo::BezPath::new();
        for el in circle.path_elements(PATH_TOLERANCE) {
            clip.push(el);
        }

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.push_clip_layer(&clip);
        let res = self.draw_image(ctx, avatar, spec.region().rect());
        ctx.pop_layer();
        res
    }

    /// Wrap and draw the title; the returned line count drives the
    /// metadata offset.
    fn draw_title(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        title: &str,
        fonts: &FontSet,
    ) -> CardResult<u32> {
        let spec = self.layout.title;
        let font = font_for(fonts, spec.style.font);

        let wrapped = {
            let text = &mut *self.text;
            wrap_title(title, spec.max_width as f32, spec.max_lines, |s| {
                text.measure(s, font, spec.style.size_px)
            })?
        };

        for (i, line) in wrapped.lines.iter().enumerate() {
            let layout =
                self.text
                    .layout_line(line, font, spec.style.size_px, brush_for(spec.style))?;
            let y = spec.y + (i as f64) * spec.line_height;
            draw_layout(ctx, &layout, font, Affine::translate((spec.x, y)));
        }
        Ok(wrapped.lines_used())
    }

    fn draw_row(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        content: &str,
        row: TextRow,
        offset: f64,
        fonts: &FontSet,
    ) -> CardResult<()> {
        let font = font_for(fonts, row.style.font);
        let layout = self
            .text
            .layout_line(content, font, row.style.size_px, brush_for(row.style))?;
        draw_layout(ctx, &layout, font, Affine::translate((row.x, row.y + offset)));
        Ok(())
    }
}

fn font_for(fonts: &FontSet, role: FontRole) -> &RegisteredFont {
    match role {
        FontRole::Mono => &fonts.mono,
        FontRole::Regular => &fonts.regular,
        FontRole::SemiBold => &fonts.semi_bold,
    }
}

fn brush_for(style: TextStyle) -> TextBrushRgba8 {
    TextBrushRgba8 {
        r: style.color.r,
        g: style.color.g,
        b: style.color.b,
        a: style.color.a,
    }
}

/// Emit a laid-out line's glyph runs at `transform`.
fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<TextBrushRgba8>,
    font: &RegisteredFont,
    transform: Affine,
) {
    ctx.set_transform(affine_to_cpu(transform));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font.data)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}
