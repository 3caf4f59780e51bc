use crate::assets::decode::{PreparedImage, decode_image};
use crate::assets::fetch::RawResources;
use crate::foundation::error::{CardError, CardResult};
use crate::text::{RegisteredFont, TextEngine};

/// The three registered faces a card draws with.
#[derive(Clone, Debug)]
pub(crate) struct FontSet {
    pub(crate) mono: RegisteredFont,
    pub(crate) regular: RegisteredFont,
    pub(crate) semi_bold: RegisteredFont,
}

/// Per-render transient set of decoded images and registered fonts.
///
/// Built after the loader's join succeeds and dropped when the render
/// completes or fails; nothing here is cached across renders. Fonts are
/// registered before construction finishes, so a `ResourceSet` in hand
/// means text measurement is defined.
pub struct ResourceSet {
    pub(crate) thumbnail: PreparedImage,
    pub(crate) avatar: PreparedImage,
    pub(crate) qrcode: PreparedImage,
    pub(crate) fonts: FontSet,
}

impl ResourceSet {
    /// Decode the three images and register the three faces.
    ///
    /// Any decode or registration failure is a resource-load failure for
    /// the render as a whole.
    pub(crate) fn prepare(raw: &RawResources, text: &mut TextEngine) -> CardResult<Self> {
        let thumbnail = decode_image(&raw.thumbnail)
            .map_err(|e| CardError::resource(format!("thumbnail: {e}")))?;
        let avatar =
            decode_image(&raw.avatar).map_err(|e| CardError::resource(format!("avatar: {e}")))?;
        let qrcode =
            decode_image(&raw.qrcode).map_err(|e| CardError::resource(format!("qrcode: {e}")))?;

        let fonts = FontSet {
            mono: text
                .register(&raw.font_mono)
                .map_err(|e| CardError::resource(format!("mono font: {e}")))?,
            regular: text
                .register(&raw.font_regular)
                .map_err(|e| CardError::resource(format!("regular font: {e}")))?,
            semi_bold: text
                .register(&raw.font_semi_bold)
                .map_err(|e| CardError::resource(format!("semi-bold font: {e}")))?,
        };

        Ok(Self {
            thumbnail,
            avatar,
            qrcode,
            fonts,
        })
    }
}
