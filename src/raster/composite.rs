use image::RgbaImage;

use crate::foundation::{
    error::{ArtpostError, ArtpostResult},
    math::mul_div255_u8,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    [
        mul_div255_u8(u16::from(px[0]), a),
        mul_div255_u8(u16::from(px[1]), a),
        mul_div255_u8(u16::from(px[2]), a),
        px[3],
    ]
}

pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

/// Composite a straight-alpha `overlay` on top of a straight-alpha `base`, in place.
///
/// Pixels where the overlay is fully transparent are left byte-identical.
pub fn alpha_composite(base: &mut RgbaImage, overlay: &RgbaImage) -> ArtpostResult<()> {
    if base.dimensions() != overlay.dimensions() {
        return Err(ArtpostError::validation(format!(
            "alpha_composite expects equal sizes, got {:?} and {:?}",
            base.dimensions(),
            overlay.dimensions()
        )));
    }
    for (d, s) in base.pixels_mut().zip(overlay.pixels()) {
        if s.0[3] == 0 {
            continue;
        }
        let out = over(premultiply(d.0), premultiply(s.0));
        d.0 = unpremultiply(out);
    }
    Ok(())
}

/// Premultiply every pixel. Color under fully transparent pixels becomes 0.
pub fn premultiply_image(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        px.0 = premultiply(px.0);
    }
    out
}

pub fn unpremultiply_image(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        px.0 = unpremultiply(px.0);
    }
    out
}

/// Paste `src` at `(x, y)` using its own alpha as the blend mask for all four channels.
///
/// Each channel becomes `dst + (src - dst) * a / 255`, alpha included, so on a
/// transparent canvas a pixel with alpha `a` lands as `rgb * a / 255` with alpha
/// `a * a / 255`. Parts of `src` outside `dst` are clipped.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    for (sx, sy, s) in src.enumerate_pixels() {
        let (tx, ty) = (x + i64::from(sx), y + i64::from(sy));
        if tx < 0 || ty < 0 || tx >= dw || ty >= dh {
            continue;
        }
        let m = u16::from(s.0[3]);
        if m == 0 {
            continue;
        }
        let d = dst.get_pixel_mut(tx as u32, ty as u32);
        for i in 0..4 {
            d.0[i] = mul_div255_u8(u16::from(s.0[i]), m)
                .saturating_add(mul_div255_u8(u16::from(d.0[i]), 255 - m));
        }
    }
}

/// Snap alpha to 0 or 255: values strictly above `cutoff` become opaque.
///
/// GIF only has one-bit transparency, so animation frames go through this before encoding.
pub fn threshold_alpha(img: &mut RgbaImage, cutoff: u8) {
    for px in img.pixels_mut() {
        px.0[3] = if px.0[3] > cutoff { 255 } else { 0 };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
