use image::imageops::FilterType;
use image::{DynamicImage, ImageError};

/// Decoded RGBA pixels ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decodes `bytes` and scales the image down to `max_width`, keeping the
/// aspect ratio. Narrower images are left at their original size.
pub fn decode_preview(bytes: &[u8], max_width: u32) -> Result<Preview, ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let fitted = fit_to_width(decoded, max_width);
    let rgba = fitted.into_rgba8();
    Ok(Preview {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

fn fit_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    if img.width() <= max_width {
        return img;
    }
    let ratio = f64::from(max_width) / f64::from(img.width());
    let height = ((f64::from(img.height()) * ratio) as u32).max(1);
    img.resize_exact(max_width, height, FilterType::Lanczos3)
}
