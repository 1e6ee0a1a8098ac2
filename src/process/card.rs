use image::{RgbaImage, imageops};

use crate::{
    foundation::error::{ArtpostError, ArtpostResult},
    process::{background::remove_background, resize::resize_premultiplied},
    raster::{bounds::alpha_bbox, composite::paste_masked},
};

/// Settings for turning a generated illustration into card art.
#[derive(Clone, Debug)]
pub struct CardOptions {
    /// Color-distance tolerance for the background flood fill.
    pub fuzz: f64,
    /// Pixels kept around the opaque content when cropping.
    pub padding: u32,
    pub width: u32,
    pub height: u32,
    /// Fraction of the canvas left empty on each side.
    pub margin: f64,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            fuzz: 30.0,
            padding: 2,
            width: 600,
            height: 420,
            margin: 0.03,
        }
    }
}

impl CardOptions {
    pub fn validate(&self) -> ArtpostResult<()> {
        if !self.fuzz.is_finite() || self.fuzz <= 0.0 {
            return Err(ArtpostError::validation("card fuzz must be > 0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ArtpostError::validation(
                "card width/height must be non-zero",
            ));
        }
        if !(0.0..0.5).contains(&self.margin) {
            return Err(ArtpostError::validation("card margin must be in [0, 0.5)"));
        }
        Ok(())
    }
}

/// Crop to the non-transparent content plus `padding`. Fully transparent input is returned as-is.
pub fn crop_to_content(img: &RgbaImage, padding: u32) -> RgbaImage {
    let Some(bbox) = alpha_bbox(img) else {
        return img.clone();
    };
    let b = bbox.pad(padding, img.width(), img.height());
    imageops::crop_imm(img, b.x0, b.y0, b.width(), b.height()).to_image()
}

/// Size that `src` scales to when fitted (aspect preserved) inside `target`.
pub fn fit_size(src: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (sw, sh) = (f64::from(src.0.max(1)), f64::from(src.1.max(1)));
    let ratio = (f64::from(target.0) / sw).min(f64::from(target.1) / sh);
    let nw = ((sw * ratio) as u32).max(1);
    let nh = ((sh * ratio) as u32).max(1);
    (nw, nh)
}

/// Scale `img` to fit inside the canvas minus its margins and center it on a
/// transparent `width` x `height` canvas.
///
/// The paste uses the resized image's alpha as its mask, so semi-transparent
/// edge pixels come out darker and more transparent than in the source.
pub fn fit_to_canvas(img: &RgbaImage, width: u32, height: u32, margin: f64) -> RgbaImage {
    let target_w = (f64::from(width) * (1.0 - 2.0 * margin)) as u32;
    let target_h = (f64::from(height) * (1.0 - 2.0 * margin)) as u32;

    let (nw, nh) = fit_size(img.dimensions(), (target_w.max(1), target_h.max(1)));
    let resized = resize_premultiplied(img, nw, nh);

    let mut canvas = RgbaImage::new(width, height);
    let x = (i64::from(width) - i64::from(nw)) / 2;
    let y = (i64::from(height) - i64::from(nh)) / 2;
    paste_masked(&mut canvas, &resized, x, y);
    canvas
}

/// Background removal, crop and fit, in that order.
#[tracing::instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn process_card(img: &RgbaImage, opts: &CardOptions) -> ArtpostResult<RgbaImage> {
    opts.validate()?;

    let cut = remove_background(img, opts.fuzz)?;

    let cropped = crop_to_content(&cut, opts.padding);
    tracing::info!(
        width = cropped.width(),
        height = cropped.height(),
        "cropped to content"
    );

    let out = fit_to_canvas(&cropped, opts.width, opts.height, opts.margin);
    tracing::info!(width = out.width(), height = out.height(), "fitted to canvas");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/process/card.rs"]
mod tests;
