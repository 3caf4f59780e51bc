use std::io::Cursor;

use base64::Engine as _;

use crate::assets::decode::unpremultiply_rgba8_in_place;
use crate::foundation::error::{CardError, CardResult};

/// Encode premultiplied RGBA8 pixels as PNG bytes.
pub(crate) fn encode_png(width: u32, height: u32, premul_data: &[u8]) -> CardResult<Vec<u8>> {
    let mut straight = premul_data.to_vec();
    unpremultiply_rgba8_in_place(&mut straight);

    let img = image::RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| CardError::encode("pixel buffer does not match surface dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| CardError::encode(format!("png write: {e}")))?;
    Ok(buf)
}

pub(crate) fn to_data_uri(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_round_trips_dimensions() {
        let premul = vec![255u8; 4 * 4 * 4];
        let png = encode_png(4, 4, &premul).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 4);
    }

    #[test]
    fn encode_png_rejects_short_buffer() {
        assert!(matches!(
            encode_png(4, 4, &[0u8; 8]),
            Err(CardError::Encode(_))
        ));
    }

    #[test]
    fn data_uri_has_png_prefix() {
        let uri = to_data_uri(b"\x89PNG");
        assert!(uri.starts_with("data:image/png;base64,"));
    }
}
