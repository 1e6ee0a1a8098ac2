use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn primaries_map_to_expected_hues() {
    let red = rgb_to_hsv([255, 0, 0]);
    assert!(close(red.h, 0.0) && close(red.s, 1.0) && close(red.v, 1.0));
    assert!(close(rgb_to_hsv([0, 255, 0]).h, 1.0 / 3.0));
    assert!(close(rgb_to_hsv([0, 0, 255]).h, 2.0 / 3.0));
    assert!(close(rgb_to_hsv([255, 0, 255]).h, 5.0 / 6.0));
}

#[test]
fn grays_have_zero_hue_and_saturation() {
    for c in [0u8, 17, 128, 255] {
        let hsv = rgb_to_hsv([c, c, c]);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
    }
}

#[test]
fn conversion_roundtrips_sampled_colors() {
    for r in (0..=255u16).step_by(51) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(17) {
                let rgb = [r as u8, g as u8, b as u8];
                assert_eq!(hsv_to_rgb(rgb_to_hsv(rgb)), rgb, "rgb={rgb:?}");
            }
        }
    }
}

#[test]
fn hue_wraps_past_one() {
    let hsv = Hsv {
        h: 1.25,
        s: 1.0,
        v: 1.0,
    };
    let wrapped = Hsv { h: 0.25, ..hsv };
    assert_eq!(hsv_to_rgb(hsv), hsv_to_rgb(wrapped));
}
