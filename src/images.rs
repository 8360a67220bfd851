use base64::Engine;

use crate::document::{EmbeddedImage, ImageData};
use crate::error::ImageError;

/// Decode a `data:image/...;base64,` URL (or a bare base64 string).
pub fn decode_data_url(url: &str) -> Result<EmbeddedImage, ImageError> {
    let url = url.trim();
    let payload = match url.strip_prefix("data:") {
        Some(rest) => {
            let (meta, data) = rest.split_once(',').ok_or(ImageError::MalformedDataUrl)?;
            if !meta.ends_with(";base64") {
                return Err(ImageError::MalformedDataUrl);
            }
            data
        }
        None => url,
    };
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
    decode_image(&bytes)
}

/// Decode PNG or JPEG bytes into an embeddable image.
pub fn decode_image(bytes: &[u8]) -> Result<EmbeddedImage, ImageError> {
    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let (pixel_width, pixel_height) = (decoded.width(), decoded.height());

    if format == image::ImageFormat::Jpeg && decoded.color() == image::ColorType::Rgb8 {
        return Ok(EmbeddedImage {
            pixel_width,
            pixel_height,
            data: ImageData::Jpeg(bytes.to_vec()),
        });
    }

    let rgba = decoded.to_rgba8();
    let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);
    let rgb: Vec<u8> = rgba
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();
    let alpha = has_alpha.then(|| rgba.pixels().map(|p| p.0[3]).collect());

    log::debug!(
        "decoded {format:?} image {pixel_width}x{pixel_height} (alpha={has_alpha})"
    );

    Ok(EmbeddedImage {
        pixel_width,
        pixel_height,
        data: ImageData::Raw { rgb, alpha },
    })
}
