use std::io::ErrorKind;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader};

use crate::config::Options;
use crate::crop;
use crate::error::{IconError, IconResult};
use crate::round;

/// Loads the source image, guessing the format from its contents.
pub fn load_image(path: &Path) -> IconResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => IconError::InputNotFound(path.to_path_buf()),
            _ => IconError::io(path, e),
        })?
        .with_guessed_format()
        .map_err(|e| IconError::io(path, e))?;

    reader.decode().map_err(|e| match e {
        ImageError::IoError(io) => IconError::io(path, io),
        other => IconError::Decode {
            path: path.to_path_buf(),
            source: other,
        },
    })
}

/// Squares `img` and, when requested, trims it to a rounded rectangle.
pub fn process(img: DynamicImage, options: &Options) -> IconResult<DynamicImage> {
    options.validate()?;

    let img = crop::crop_max_square(img)?;
    if !options.round {
        return Ok(img);
    }

    let (side, _) = img.dimensions();
    let radius = options.radius_for(side)?;
    round::trim_round_rectangle(&img, radius, options.smooth)
}

pub fn preprocess(path: &Path, options: &Options) -> IconResult<DynamicImage> {
    options.validate()?;
    let img = load_image(path)?;
    process(img, options)
}
