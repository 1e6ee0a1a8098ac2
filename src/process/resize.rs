use image::{
    ColorType, DynamicImage, RgbaImage,
    imageops::{self, FilterType},
};

use crate::{
    foundation::error::{ArtpostError, ArtpostResult},
    raster::composite::{premultiply_image, unpremultiply_image},
};

pub const FAVICON_SIZE: u32 = 48;

/// Lanczos3 resize of straight-alpha RGBA, filtered in premultiplied space.
///
/// Color hidden under transparent pixels never reaches the visible edge.
pub fn resize_premultiplied(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premul = premultiply_image(img);
    let resized = imageops::resize(&premul, width, height, FilterType::Lanczos3);
    unpremultiply_image(&resized)
}

/// Lanczos3 resize to exactly `width` x `height`, ignoring aspect ratio.
///
/// Images with alpha are filtered premultiplied (8 bits per channel) and
/// converted back to their original color type.
pub fn resize_exact(img: &DynamicImage, width: u32, height: u32) -> ArtpostResult<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(ArtpostError::validation(
            "resize width/height must be non-zero",
        ));
    }
    let color = img.color();
    if !color.has_alpha() {
        return Ok(img.resize_exact(width, height, FilterType::Lanczos3));
    }

    let out = DynamicImage::ImageRgba8(resize_premultiplied(&img.to_rgba8(), width, height));
    Ok(match color {
        ColorType::La8 => DynamicImage::ImageLumaA8(out.to_luma_alpha8()),
        ColorType::La16 => DynamicImage::ImageLumaA16(out.to_luma_alpha16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(out.to_rgba16()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(out.to_rgba32f()),
        _ => out,
    })
}

pub fn resize_favicon(img: &DynamicImage) -> ArtpostResult<DynamicImage> {
    resize_exact(img, FAVICON_SIZE, FAVICON_SIZE)
}

/// Dimensions and pixel layout of a decoded image.
///
/// `mode` describes the decoded buffer, not the file. Paletted PNGs and GIFs
/// are expanded on decode, so they report `RGB` or `RGBA` rather than `P`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub mode: &'static str,
}

impl ImageInfo {
    pub fn of(img: &DynamicImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            mode: mode_name(img.color()),
        }
    }
}

impl std::fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Size: ({}, {}), Mode: {}",
            self.width, self.height, self.mode
        )
    }
}

/// Short channel-layout label, e.g. `RGBA` or `L;16`.
pub fn mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F32",
        ColorType::Rgba32F => "RGBA;F32",
        _ => "unknown",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/process/resize.rs"]
mod tests;
