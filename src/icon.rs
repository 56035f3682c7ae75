use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use tempfile::NamedTempFile;

use crate::error::{IconError, IconResult};

/// Largest width and height an ICO directory entry can describe.
pub const MAX_ICON_SIDE: u32 = 256;

/// Uses `explicit` verbatim when given, otherwise `<input stem>.ico` in the
/// working directory.
pub fn output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(format!("{stem}.ico"))
}

/// Shrinks `img` to fit an ICO entry. Returns `None` when it already fits.
pub fn fit_to_icon(img: &DynamicImage) -> Option<DynamicImage> {
    let (w, h) = img.dimensions();
    if w <= MAX_ICON_SIDE && h <= MAX_ICON_SIDE {
        return None;
    }
    let scale = f64::from(MAX_ICON_SIDE) / f64::from(w.max(h));
    let nw = ((f64::from(w) * scale).round() as u32).clamp(1, MAX_ICON_SIDE);
    let nh = ((f64::from(h) * scale).round() as u32).clamp(1, MAX_ICON_SIDE);
    Some(img.resize_exact(nw, nh, FilterType::Lanczos3))
}

/// Encodes `img` as a single-entry ICO with a 32-bit RGBA PNG payload.
pub fn encode_ico(img: &DynamicImage) -> IconResult<Vec<u8>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 || w > MAX_ICON_SIDE || h > MAX_ICON_SIDE {
        return Err(IconError::encoding(format!(
            "ICO entries must be between 1x1 and {MAX_ICON_SIDE}x{MAX_ICON_SIDE}, got {w}x{h}"
        )));
    }

    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    let mut buf = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut buf), ImageFormat::Ico)
        .map_err(|e| IconError::encoding(e.to_string()))?;

    Ok(buf)
}

/// Writes `bytes` to `path` through a temporary file in the same directory,
/// so a failed write never leaves a truncated icon behind.
pub fn write_icon(path: &Path, bytes: &[u8]) -> IconResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| IconError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| IconError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| IconError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| IconError::io(path, e.error))?;

    Ok(())
}
