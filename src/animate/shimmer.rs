use image::RgbaImage;

use crate::{
    animate::glint::VISIBLE_ALPHA,
    foundation::error::{ArtpostError, ArtpostResult},
    raster::{
        composite::threshold_alpha,
        hsv::{Hsv, hsv_to_rgb, rgb_to_hsv},
    },
};

/// Saturation at or below which a pixel is treated as neutral and left alone.
pub const MIN_SATURATION: f64 = 0.15;

/// Settings for the hue shimmer animation.
#[derive(Clone, Debug)]
pub struct ShimmerOptions {
    pub frames: u32,
    /// Per-frame delay in milliseconds.
    pub delay_ms: u32,
}

impl Default for ShimmerOptions {
    fn default() -> Self {
        Self {
            frames: 48,
            delay_ms: 120,
        }
    }
}

impl ShimmerOptions {
    pub fn validate(&self) -> ArtpostResult<()> {
        if self.frames == 0 {
            return Err(ArtpostError::validation("frames must be non-zero"));
        }
        Ok(())
    }
}

pub fn hsv_map(img: &RgbaImage) -> Vec<Hsv> {
    img.pixels()
        .map(|p| rgb_to_hsv([p.0[0], p.0[1], p.0[2]]))
        .collect()
}

/// Pixels that are both visible and colorful enough to shimmer.
pub fn saturation_mask(img: &RgbaImage, hsv: &[Hsv]) -> Vec<bool> {
    img.pixels()
        .zip(hsv)
        .map(|(p, c)| c.s > MIN_SATURATION && p.0[3] > VISIBLE_ALPHA)
        .collect()
}

/// Copy of `img` with the hue of masked pixels rotated by `shift` turns.
///
/// Unmasked pixels keep their exact bytes. Alpha is not modified here.
pub fn shimmer_frame(img: &RgbaImage, hsv: &[Hsv], mask: &[bool], shift: f64) -> RgbaImage {
    let mut out = img.clone();
    for ((px, c), &on) in out.pixels_mut().zip(hsv).zip(mask) {
        if !on {
            continue;
        }
        let rotated = Hsv {
            h: (c.h + shift).rem_euclid(1.0),
            ..*c
        };
        let [r, g, b] = hsv_to_rgb(rotated);
        px.0[0] = r;
        px.0[1] = g;
        px.0[2] = b;
    }
    out
}

/// Render one full hue rotation over `opts.frames` frames.
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn render_shimmer_frames(
    img: &RgbaImage,
    opts: &ShimmerOptions,
) -> ArtpostResult<Vec<RgbaImage>> {
    opts.validate()?;

    let hsv = hsv_map(img);
    let mask = saturation_mask(img, &hsv);
    tracing::info!(
        colorful = mask.iter().filter(|&&m| m).count(),
        opaque = img.pixels().filter(|p| p.0[3] > VISIBLE_ALPHA).count(),
        "built saturation mask"
    );

    let mut frames = Vec::with_capacity(opts.frames as usize);
    for i in 0..opts.frames {
        let shift = f64::from(i) / f64::from(opts.frames);
        let mut frame = shimmer_frame(img, &hsv, &mask, shift);
        threshold_alpha(&mut frame, VISIBLE_ALPHA);
        frames.push(frame);
        if (i + 1) % 10 == 0 {
            tracing::info!(frame = i + 1, total = opts.frames, "rendered frame");
        }
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animate/shimmer.rs"]
mod tests;
