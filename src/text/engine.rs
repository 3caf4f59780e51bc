use crate::foundation::error::{CardError, CardResult};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// A font face that has completed registration.
///
/// Holding one proves the family is known to the engine's font collection,
/// so measurement through it is always defined. The glyph blob doubles as
/// the raster-side font handle.
#[derive(Clone, Debug)]
pub struct RegisteredFont {
    pub(crate) family_name: String,
    pub(crate) data: vello_cpu::peniko::FontData,
}

/// Stateful helper owning the Parley font and layout contexts.
///
/// Measurement and line layout both go through here; nothing in the crate
/// measures text against a face that has not passed [`TextEngine::register`].
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Construct an engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register raw font bytes and resolve the face's family name.
    ///
    /// Fails when the bytes do not yield a usable family, which counts as a
    /// resource-load failure for the render.
    pub fn register(&mut self, font_bytes: &[u8]) -> CardResult<RegisteredFont> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CardError::resource("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CardError::resource("registered font family has no name"))?
            .to_string();

        let data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes.to_vec()), 0);
        Ok(RegisteredFont { family_name, data })
    }

    /// Shape and lay out a single unwrapped line.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &RegisteredFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> CardResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardError::measurement("text size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Measure the advance width of `text` at the given face and size.
    pub fn measure(
        &mut self,
        text: &str,
        font: &RegisteredFont,
        size_px: f32,
    ) -> CardResult<f32> {
        let layout = self.layout_line(text, font, size_px, TextBrushRgba8::default())?;
        Ok(layout.full_width())
    }
}
