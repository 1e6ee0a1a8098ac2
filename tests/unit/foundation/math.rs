use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn color_distance_is_euclidean() {
    assert_eq!(color_distance([0, 0, 0], [0.0, 0.0, 0.0]), 0.0);
    assert!((color_distance([3, 4, 0], [0.0, 0.0, 0.0]) - 5.0).abs() < 1e-12);
    assert!((color_distance([255, 255, 255], [0.0, 0.0, 0.0]) - 441.672_955_93).abs() < 1e-6);
}

#[test]
fn luminance_weights_sum_to_one() {
    assert!((luminance([255, 255, 255]) - 255.0).abs() < 1e-9);
    assert_eq!(luminance([0, 0, 0]), 0.0);
    assert!(luminance([0, 255, 0]) > luminance([255, 0, 0]));
    assert!(luminance([255, 0, 0]) > luminance([0, 0, 255]));
}

#[test]
fn linspace_includes_both_ends() {
    let v: Vec<f64> = linspace01(5).collect();
    assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    let one: Vec<f64> = linspace01(1).collect();
    assert_eq!(one, vec![0.0]);
}
