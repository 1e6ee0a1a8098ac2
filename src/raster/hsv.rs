/// Hue, saturation and value, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

pub fn rgb_to_hsv(rgb: [u8; 3]) -> Hsv {
    let r = f64::from(rgb[0]) / 255.0;
    let g = f64::from(rgb[1]) / 255.0;
    let b = f64::from(rgb[2]) / 255.0;

    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    let s = if maxc != 0.0 { (maxc - minc) / maxc } else { 0.0 };
    if s == 0.0 {
        return Hsv { h: 0.0, s, v };
    }

    let delta = maxc - minc;
    // Ties resolve blue, then green, then red.
    let h6 = if maxc == b {
        (r - g) / delta + 4.0
    } else if maxc == g {
        (b - r) / delta + 2.0
    } else {
        ((g - b) / delta).rem_euclid(6.0)
    };

    Hsv { h: h6 / 6.0, s, v }
}

pub fn hsv_to_rgb(hsv: Hsv) -> [u8; 3] {
    let Hsv { h, s, v } = hsv;
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [to_u8(r), to_u8(g), to_u8(b)]
}

fn to_u8(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/hsv.rs"]
mod tests;
