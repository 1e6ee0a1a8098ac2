pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Euclidean distance between two RGB triples.
pub fn color_distance(a: [u8; 3], b: [f64; 3]) -> f64 {
    let dr = f64::from(a[0]) - b[0];
    let dg = f64::from(a[1]) - b[1];
    let db = f64::from(a[2]) - b[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

/// ITU-R 601 luma on the 0..=255 scale.
pub fn luminance(rgb: [u8; 3]) -> f64 {
    0.299 * f64::from(rgb[0]) + 0.587 * f64::from(rgb[1]) + 0.114 * f64::from(rgb[2])
}

/// `n` evenly spaced samples over `[0, 1]`, both ends included.
pub(crate) fn linspace01(n: usize) -> impl Iterator<Item = f64> {
    let last = n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| i as f64 / last)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
