use image::Rgba;

use super::*;

fn sample_image() -> RgbaImage {
    let mut img = RgbaImage::new(4, 2);
    img.put_pixel(0, 0, Rgba([220, 40, 40, 255])); // saturated, opaque
    img.put_pixel(1, 0, Rgba([40, 160, 220, 255])); // saturated, opaque
    img.put_pixel(2, 0, Rgba([90, 90, 95, 255])); // neutral
    img.put_pixel(3, 0, Rgba([220, 40, 40, 100])); // saturated but faint
    img.put_pixel(0, 1, Rgba([10, 10, 10, 255])); // dark neutral
    img.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
    img.put_pixel(2, 1, Rgba([30, 200, 60, 129]));
    img.put_pixel(3, 1, Rgba([255, 255, 255, 255]));
    img
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}

#[test]
fn mask_requires_saturation_and_visibility() {
    let img = sample_image();
    let hsv = hsv_map(&img);
    let mask = saturation_mask(&img, &hsv);
    assert_eq!(
        mask,
        vec![true, true, false, false, false, false, true, false]
    );
}

#[test]
fn unmasked_pixels_are_identical_in_every_frame() {
    let img = sample_image();
    let opts = ShimmerOptions {
        frames: 12,
        ..ShimmerOptions::default()
    };
    let frames = render_shimmer_frames(&img, &opts).unwrap();
    assert_eq!(frames.len(), 12);

    for (x, y) in [(2, 0), (3, 0), (0, 1), (1, 1), (3, 1)] {
        let first = frames[0].get_pixel(x, y);
        assert!(
            frames.iter().all(|f| f.get_pixel(x, y) == first),
            "pixel ({x}, {y}) changed"
        );
    }
}

#[test]
fn masked_hue_rotates_by_frame_fraction() {
    let img = sample_image();
    let n = 8u32;
    let opts = ShimmerOptions {
        frames: n,
        ..ShimmerOptions::default()
    };
    let frames = render_shimmer_frames(&img, &opts).unwrap();
    let src = hsv_map(&img);

    for (k, frame) in frames.iter().enumerate() {
        for (x, y) in [(0u32, 0u32), (1, 0), (2, 1)] {
            let idx = (y * img.width() + x) as usize;
            let expected = (src[idx].h + k as f64 / f64::from(n)).rem_euclid(1.0);
            let p = frame.get_pixel(x, y).0;
            let got = rgb_to_hsv([p[0], p[1], p[2]]).h;
            assert!(
                hue_distance(got, expected) < 0.01,
                "frame {k} ({x}, {y}): got {got}, expected {expected}"
            );
        }
    }
}

#[test]
fn first_frame_matches_source_colors() {
    let img = sample_image();
    let frames = render_shimmer_frames(&img, &ShimmerOptions::default()).unwrap();
    for (a, b) in frames[0].pixels().zip(img.pixels()) {
        assert_eq!(a.0[..3], b.0[..3]);
    }
}

#[test]
fn frames_have_binary_alpha() {
    let img = sample_image();
    let frames = render_shimmer_frames(&img, &ShimmerOptions::default()).unwrap();
    for f in &frames {
        assert!(f.pixels().all(|p| p.0[3] == 0 || p.0[3] == 255));
    }
    assert_eq!(frames[0].get_pixel(2, 1).0[3], 255);
    assert_eq!(frames[0].get_pixel(3, 0).0[3], 0);
}

#[test]
fn zero_frames_is_rejected() {
    let img = sample_image();
    let opts = ShimmerOptions {
        frames: 0,
        ..ShimmerOptions::default()
    };
    assert!(render_shimmer_frames(&img, &opts).is_err());
}
