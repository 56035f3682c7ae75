use image::{imageops, DynamicImage, GenericImageView};

use crate::error::{IconError, IconResult};

/// Crop box `(left, top, right, bottom)` of a `crop_width` x `crop_height`
/// region centered in a `width` x `height` image. Offsets use floor division,
/// so they go negative when the crop is larger than the source.
pub fn center_box(
    width: u32,
    height: u32,
    crop_width: u32,
    crop_height: u32,
) -> (i64, i64, i64, i64) {
    let left = (i64::from(width) - i64::from(crop_width)).div_euclid(2);
    let top = (i64::from(height) - i64::from(crop_height)).div_euclid(2);
    (
        left,
        top,
        left + i64::from(crop_width),
        top + i64::from(crop_height),
    )
}

/// Returns the `crop_width` x `crop_height` region centered on the image's midpoint.
///
/// Areas that fall outside the source are filled with zero (transparent black).
pub fn crop_center(
    img: &DynamicImage,
    crop_width: u32,
    crop_height: u32,
) -> IconResult<DynamicImage> {
    if crop_width == 0 || crop_height == 0 {
        return Err(IconError::invalid_argument(format!(
            "crop size must be positive, got {crop_width}x{crop_height}"
        )));
    }

    let (width, height) = img.dimensions();
    let (left, top, right, bottom) = center_box(width, height, crop_width, crop_height);

    let inside =
        left >= 0 && top >= 0 && right <= i64::from(width) && bottom <= i64::from(height);
    if inside {
        return Ok(img.crop_imm(left as u32, top as u32, crop_width, crop_height));
    }

    let mut padded = DynamicImage::new(crop_width, crop_height, img.color());
    imageops::replace(&mut padded, img, -left, -top);
    Ok(padded)
}

/// Crops the largest possible square out of the center of the image.
pub fn crop_max_square(img: DynamicImage) -> IconResult<DynamicImage> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::invalid_argument(format!(
            "cannot crop an empty {width}x{height} image"
        )));
    }
    if width == height {
        return Ok(img);
    }

    let side = width.min(height);
    crop_center(&img, side, side)
}
