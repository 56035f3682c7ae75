use image::{DynamicImage, GenericImageView, GrayImage};

use crate::error::{IconError, IconResult};
use crate::mask;

/// Returns a copy of `img` trimmed to a rounded rectangle of corner radius
/// `radius`. With `use_filter` the mask is smoothed first so the corner arcs
/// fade out instead of stepping.
pub fn trim_round_rectangle(
    img: &DynamicImage,
    radius: u32,
    use_filter: bool,
) -> IconResult<DynamicImage> {
    let mut mask = mask::round_mask(img, radius);
    if use_filter {
        mask = mask::smooth(&mask);
    }
    set_alpha_channel(img, &mask)
}

/// Replaces the alpha channel of `img` with `mask`.
///
/// This overwrites, it does not blend: whatever alpha the source carried is
/// dropped. Grayscale sources come back as `LumaA8`, everything else as
/// `Rgba8`.
pub fn set_alpha_channel(img: &DynamicImage, mask: &GrayImage) -> IconResult<DynamicImage> {
    if img.dimensions() != mask.dimensions() {
        let (w, h) = img.dimensions();
        let (mw, mh) = mask.dimensions();
        return Err(IconError::invalid_argument(format!(
            "mask is {mw}x{mh} but image is {w}x{h}"
        )));
    }

    let out = match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => {
            let mut buf = img.to_luma_alpha8();
            for (px, m) in buf.pixels_mut().zip(mask.pixels()) {
                px[1] = m[0];
            }
            DynamicImage::ImageLumaA8(buf)
        }
        _ => {
            let mut buf = img.to_rgba8();
            for (px, m) in buf.pixels_mut().zip(mask.pixels()) {
                px[3] = m[0];
            }
            DynamicImage::ImageRgba8(buf)
        }
    };

    Ok(out)
}
