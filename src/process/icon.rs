use image::{RgbImage, imageops};

use crate::{
    foundation::{
        core::{BBox, Rgb},
        error::{ArtpostError, ArtpostResult},
    },
    raster::bounds::mask_bbox,
};

/// Settings for squaring up an app icon.
#[derive(Clone, Debug)]
pub struct IconOptions {
    /// Fill color of the square canvas.
    pub bg_color: Rgb,
    /// Padding around the content, as a percentage of its longer side.
    pub padding_pct: u32,
    /// Side length of the output in pixels.
    pub size: u32,
    /// Max per-channel deviation from the detected background still treated as background.
    pub threshold: f64,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            bg_color: Rgb::new(45, 38, 34),
            padding_pct: 5,
            size: 1024,
            threshold: 20.0,
        }
    }
}

impl IconOptions {
    pub fn validate(&self) -> ArtpostResult<()> {
        if self.size == 0 {
            return Err(ArtpostError::validation("icon size must be non-zero"));
        }
        if self.padding_pct > 1000 {
            return Err(ArtpostError::validation("icon padding must be <= 1000%"));
        }
        Ok(())
    }
}

/// Mean of the four corner pixels.
pub fn detect_background(img: &RgbImage) -> [f64; 3] {
    let (w, h) = img.dimensions();
    let corners = [
        img.get_pixel(0, 0),
        img.get_pixel(w - 1, 0),
        img.get_pixel(0, h - 1),
        img.get_pixel(w - 1, h - 1),
    ];
    let mut avg = [0.0f64; 3];
    for px in corners {
        for (a, &c) in avg.iter_mut().zip(&px.0) {
            *a += f64::from(c) / 4.0;
        }
    }
    avg
}

/// Row-major mask of pixels whose largest channel deviation from `bg` exceeds `threshold`.
pub fn content_mask(img: &RgbImage, bg: [f64; 3], threshold: f64) -> Vec<bool> {
    img.pixels()
        .map(|p| {
            p.0.iter()
                .zip(&bg)
                .map(|(&c, &b)| (f64::from(c) - b).abs())
                .fold(0.0f64, f64::max)
                > threshold
        })
        .collect()
}

/// Bounding box of the content mask, or the whole image when the mask is empty.
pub fn content_bounds(mask: &[bool], width: u32, height: u32) -> BBox {
    mask_bbox(mask, width, height).unwrap_or_else(|| BBox::full(width, height))
}

/// Center `img` on a square canvas of `bg` with `padding_pct` percent of margin.
pub fn pad_to_square(img: &RgbImage, bg: Rgb, padding_pct: u32) -> RgbImage {
    let (cw, ch) = img.dimensions();
    let side = cw.max(ch);
    let padding = (u64::from(side) * u64::from(padding_pct) / 100) as u32;
    let canvas_size = side + 2 * padding;

    let mut canvas = RgbImage::from_pixel(canvas_size, canvas_size, bg.into());
    let x = i64::from((canvas_size - cw) / 2);
    let y = i64::from((canvas_size - ch) / 2);
    imageops::replace(&mut canvas, img, x, y);
    canvas
}

/// Crop to content, pad to a square and resize to `opts.size`.
#[tracing::instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn process_icon(img: &RgbImage, opts: &IconOptions) -> ArtpostResult<RgbImage> {
    opts.validate()?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(ArtpostError::validation("icon input is empty"));
    }

    let bg = detect_background(img);
    tracing::info!(
        r = bg[0].round(),
        g = bg[1].round(),
        b = bg[2].round(),
        "detected background"
    );

    let mask = content_mask(img, bg, opts.threshold);
    let bounds = content_bounds(&mask, w, h);
    tracing::info!(
        x0 = bounds.x0,
        y0 = bounds.y0,
        x1 = bounds.x1 - 1,
        y1 = bounds.y1 - 1,
        "content bounds"
    );

    let cropped =
        imageops::crop_imm(img, bounds.x0, bounds.y0, bounds.width(), bounds.height()).to_image();
    let squared = pad_to_square(&cropped, opts.bg_color, opts.padding_pct);
    tracing::info!(side = squared.width(), "padded to square");

    Ok(imageops::resize(
        &squared,
        opts.size,
        opts.size,
        imageops::FilterType::Lanczos3,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/process/icon.rs"]
mod tests;
