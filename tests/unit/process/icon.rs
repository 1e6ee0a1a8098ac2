use image::Rgb as Px;

use super::*;

#[test]
fn detect_background_averages_corners() {
    let mut img = RgbImage::from_pixel(4, 4, Px([0, 0, 0]));
    img.put_pixel(0, 0, Px([40, 0, 0]));
    img.put_pixel(3, 0, Px([0, 40, 0]));
    img.put_pixel(0, 3, Px([0, 0, 40]));
    img.put_pixel(3, 3, Px([40, 40, 40]));
    assert_eq!(detect_background(&img), [20.0, 20.0, 20.0]);
}

#[test]
fn uniform_image_has_empty_mask_and_full_bounds() {
    let img = RgbImage::from_pixel(10, 10, Px([45, 38, 34]));
    let bg = detect_background(&img);
    let mask = content_mask(&img, bg, 20.0);
    assert!(mask.iter().all(|&m| !m));
    assert_eq!(content_bounds(&mask, 10, 10), BBox::full(10, 10));
}

#[test]
fn content_mask_uses_max_channel_deviation() {
    let mut img = RgbImage::from_pixel(3, 1, Px([100, 100, 100]));
    img.put_pixel(1, 0, Px([100, 121, 100]));
    img.put_pixel(2, 0, Px([110, 110, 115]));
    let mask = content_mask(&img, [100.0, 100.0, 100.0], 20.0);
    assert_eq!(mask, vec![false, true, false]);
}

#[test]
fn pad_to_square_centers_on_background() {
    let img = RgbImage::from_pixel(20, 10, Px([255, 255, 255]));
    let out = pad_to_square(&img, Rgb::new(1, 2, 3), 10);
    // side 20, padding 2 -> 24
    assert_eq!(out.dimensions(), (24, 24));
    assert_eq!(out.get_pixel(0, 0).0, [1, 2, 3]);
    assert_eq!(out.get_pixel(2, 7).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(2, 6).0, [1, 2, 3]);
    assert_eq!(out.get_pixel(21, 16).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(22, 16).0, [1, 2, 3]);
}

#[test]
fn process_icon_all_background_does_not_fail() {
    let img = RgbImage::from_pixel(10, 10, Px([45, 38, 34]));
    let opts = IconOptions {
        size: 64,
        ..IconOptions::default()
    };
    let out = process_icon(&img, &opts).unwrap();
    assert_eq!(out.dimensions(), (64, 64));
}

#[test]
fn process_icon_crops_content_before_padding() {
    let mut img = RgbImage::from_pixel(100, 100, Px([10, 10, 10]));
    for y in 40..60 {
        for x in 30..70 {
            img.put_pixel(x, y, Px([250, 200, 0]));
        }
    }
    let opts = IconOptions {
        bg_color: Rgb::new(0, 0, 255),
        padding_pct: 0,
        size: 40,
        ..IconOptions::default()
    };
    let out = process_icon(&img, &opts).unwrap();
    assert_eq!(out.dimensions(), (40, 40));
    // Content fills the full width; the vertical slack is the pad color.
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 255]);
    assert_eq!(out.get_pixel(20, 20).0, [250, 200, 0]);
}

#[test]
fn icon_options_validate() {
    assert!(IconOptions::default().validate().is_ok());
    let bad = IconOptions {
        size: 0,
        ..IconOptions::default()
    };
    assert!(bad.validate().is_err());
}
