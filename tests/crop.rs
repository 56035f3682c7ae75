use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, Rgba, RgbaImage};

use img2ico::crop::{center_box, crop_center, crop_max_square};
use img2ico::error::IconError;

/// Each pixel stores its own coordinates so crops can be located exactly.
fn coord_image(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgb16(ImageBuffer::from_fn(w, h, |x, y| {
        Rgb([x as u16, y as u16, 0])
    }))
}

#[test]
fn square_image_is_returned_unchanged() {
    let img = coord_image(64, 64);
    let out = crop_max_square(img.clone()).unwrap();
    assert_eq!(out, img);
}

#[test]
fn landscape_crops_from_horizontal_center() {
    assert_eq!(center_box(400, 300, 300, 300), (50, 0, 350, 300));

    let out = crop_max_square(coord_image(400, 300)).unwrap();
    assert_eq!(out.dimensions(), (300, 300));

    let buf = out.as_rgb16().unwrap();
    assert_eq!(buf.get_pixel(0, 0), &Rgb([50, 0, 0]));
    assert_eq!(buf.get_pixel(299, 299), &Rgb([349, 299, 0]));
}

#[test]
fn portrait_crops_from_vertical_center() {
    let out = crop_max_square(coord_image(300, 400)).unwrap();
    assert_eq!(out.dimensions(), (300, 300));

    let buf = out.as_rgb16().unwrap();
    assert_eq!(buf.get_pixel(0, 0), &Rgb([0, 50, 0]));
}

#[test]
fn odd_remainder_floors_the_offset() {
    assert_eq!(center_box(5, 2, 2, 2), (1, 0, 3, 2));

    let out = crop_max_square(coord_image(5, 2)).unwrap();
    assert_eq!(out.dimensions(), (2, 2));
    assert_eq!(out.as_rgb16().unwrap().get_pixel(0, 0), &Rgb([1, 0, 0]));
}

#[test]
fn crop_center_keeps_requested_size() {
    let out = crop_center(&coord_image(100, 80), 31, 17).unwrap();
    assert_eq!(out.dimensions(), (31, 17));
    // left = (100 - 31) / 2 = 34, top = (80 - 17) / 2 = 31
    assert_eq!(out.as_rgb16().unwrap().get_pixel(0, 0), &Rgb([34, 31, 0]));
}

#[test]
fn oversized_crop_is_padded_with_transparent_pixels() {
    let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255])));
    let out = crop_center(&src, 4, 4).unwrap();

    assert_eq!(out.dimensions(), (4, 4));
    assert_eq!(out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(out.get_pixel(3, 3), Rgba([0, 0, 0, 0]));
    assert_eq!(out.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
    assert_eq!(out.get_pixel(2, 2), Rgba([255, 0, 0, 255]));
}

#[test]
fn zero_crop_size_is_rejected() {
    let err = crop_center(&coord_image(10, 10), 0, 5).unwrap_err();
    assert!(matches!(err, IconError::InvalidArgument(_)));
}

#[test]
fn empty_image_is_rejected() {
    let err = crop_max_square(DynamicImage::new_rgb8(0, 10)).unwrap_err();
    assert!(matches!(err, IconError::InvalidArgument(_)));
}
