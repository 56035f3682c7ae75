//! Rounded-rectangle alpha masks.
//!
//! A mask is a single-channel image where 0 is fully transparent and 255 is
//! fully opaque. The rounded rectangle is the union of a horizontal band, a
//! vertical band and one quarter-disc per corner.

use image::{GenericImageView, GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::filter::filter3x3;
use imageproc::rect::Rect;

const OPAQUE: Luma<u8> = Luma([255]);

/// Builds a mask the size of `img` with an opaque rounded rectangle whose
/// straight edges touch the border and whose corners have radius `radius`.
///
/// `radius` is clamped to half of the shorter side; at that size the four
/// corner slices tile an inscribed circle.
pub fn round_mask<I: GenericImageView>(img: &I, radius: u32) -> GrayImage {
    let (w, h) = img.dimensions();
    let mut mask = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return mask;
    }

    let r = i64::from(radius.min(w.min(h) / 2));
    let right = i64::from(w) - 1;
    let bottom = i64::from(h) - 1;
    let d = r * 2;

    fill_horizontal_band(&mut mask, r as u32, bottom - r);
    fill_vertical_band(&mut mask, r as u32, right - r);

    fill_pie_slice(&mut mask, (0, 0, d, d), 180.0, 270.0);
    fill_pie_slice(&mut mask, (0, bottom - d, d, bottom), 90.0, 180.0);
    fill_pie_slice(&mut mask, (right - d, bottom - d, right, bottom), 0.0, 90.0);
    fill_pie_slice(&mut mask, (right - d, 0, right, d), 270.0, 360.0);

    mask
}

/// 3x3 low-pass filter used to anti-alias mask edges.
///
/// The outermost row and column are copied through unfiltered, so a uniform
/// mask comes back unchanged and straight edges stay fully opaque.
pub fn smooth(mask: &GrayImage) -> GrayImage {
    const KERNEL: [f32; 9] = [1., 1., 1., 1., 5., 1., 1., 1., 1.];
    const WEIGHT: f32 = 13.;

    let (w, h) = mask.dimensions();
    let sums = filter3x3::<_, f32, f32>(mask, &KERNEL);
    GrayImage::from_fn(w, h, |x, y| {
        if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
            return *mask.get_pixel(x, y);
        }
        Luma([(sums.get_pixel(x, y)[0] / WEIGHT).round() as u8])
    })
}

/// Inclusive bounding box `(x0, y0, x1, y1)`, may extend past the image.
type Bounds = (i64, i64, i64, i64);

/// Fills rows `top..=bottom` across the full width. An inverted range draws
/// nothing.
fn fill_horizontal_band(mask: &mut GrayImage, top: u32, bottom: i64) {
    if bottom < i64::from(top) {
        return;
    }
    let height = (bottom - i64::from(top) + 1) as u32;
    let rect = Rect::at(0, top as i32).of_size(mask.width(), height);
    draw_filled_rect_mut(mask, rect, OPAQUE);
}

/// Fills columns `left..=right` across the full height.
fn fill_vertical_band(mask: &mut GrayImage, left: u32, right: i64) {
    if right < i64::from(left) {
        return;
    }
    let width = (right - i64::from(left) + 1) as u32;
    let rect = Rect::at(left as i32, 0).of_size(width, mask.height());
    draw_filled_rect_mut(mask, rect, OPAQUE);
}

/// Clips a pie slice's box to the mask. `None` when nothing is left.
fn clip(mask: &GrayImage, (x0, y0, x1, y1): Bounds) -> Option<Bounds> {
    let (w, h) = mask.dimensions();
    let clipped = (
        x0.max(0),
        y0.max(0),
        x1.min(i64::from(w) - 1),
        y1.min(i64::from(h) - 1),
    );
    (clipped.0 <= clipped.2 && clipped.1 <= clipped.3).then_some(clipped)
}

/// Fills the sector of the ellipse inscribed in `bounds` between `start` and
/// `end` degrees, measured clockwise from the positive x axis.
fn fill_pie_slice(mask: &mut GrayImage, bounds: Bounds, start: f64, end: f64) {
    let (bx0, by0, bx1, by1) = bounds;
    let cx = (bx0 + bx1) as f64 / 2.0;
    let cy = (by0 + by1) as f64 / 2.0;
    let rx = (bx1 - bx0) as f64 / 2.0;
    let ry = (by1 - by0) as f64 / 2.0;

    let Some((x0, y0, x1, y1)) = clip(mask, bounds) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if in_ellipse(dx, dy, rx, ry) && in_arc(dx, dy, start, end) {
                mask.put_pixel(x as u32, y as u32, OPAQUE);
            }
        }
    }
}

fn in_ellipse(dx: f64, dy: f64, rx: f64, ry: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return dx == 0.0 && dy == 0.0;
    }
    (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
}

fn in_arc(dx: f64, dy: f64, start: f64, end: f64) -> bool {
    if dx == 0.0 && dy == 0.0 {
        return true;
    }
    let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    let range = start..=end;
    range.contains(&angle) || range.contains(&(angle + 360.0))
}
