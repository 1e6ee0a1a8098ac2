//! File-in, file-out entry points behind each `artpost` subcommand.

use std::path::Path;

use image::DynamicImage;

use crate::{
    animate::{
        glint::{GlintOptions, render_glint_frames},
        shimmer::{ShimmerOptions, render_shimmer_frames},
    },
    assets::decode::{open_image, save_png},
    encode::gif_writer::{GifConfig, write_gif},
    foundation::error::ArtpostResult,
    process::{
        card::{CardOptions, process_card},
        icon::{IconOptions, process_icon},
        resize::{ImageInfo, resize_exact},
    },
};

/// What an animation run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifSummary {
    pub frames: u32,
    pub delay_ms: u32,
    pub bytes: u64,
}

impl GifSummary {
    pub fn loop_secs(&self) -> f64 {
        f64::from(self.frames) * f64::from(self.delay_ms) / 1000.0
    }
}

fn log_animation_input(img: &DynamicImage, frames: u32, delay_ms: u32) {
    tracing::info!(
        width = img.width(),
        height = img.height(),
        frames,
        delay_ms,
        loop_secs = f64::from(frames) * f64::from(delay_ms) / 1000.0,
        "input"
    );
}

pub fn animate_glints(input: &Path, output: &Path, opts: &GlintOptions) -> ArtpostResult<GifSummary> {
    opts.validate()?;
    let img = open_image(input)?;
    log_animation_input(&img, opts.frames, opts.delay_ms);

    let frames = render_glint_frames(&img.to_rgba8(), opts)?;
    tracing::info!("assembling gif");
    let bytes = write_gif(output, &frames, &GifConfig::looping(opts.delay_ms))?;
    Ok(GifSummary {
        frames: opts.frames,
        delay_ms: opts.delay_ms,
        bytes,
    })
}

pub fn animate_shimmer(
    input: &Path,
    output: &Path,
    opts: &ShimmerOptions,
) -> ArtpostResult<GifSummary> {
    opts.validate()?;
    let img = open_image(input)?;
    log_animation_input(&img, opts.frames, opts.delay_ms);

    let frames = render_shimmer_frames(&img.to_rgba8(), opts)?;
    tracing::info!("assembling gif");
    let bytes = write_gif(output, &frames, &GifConfig::looping(opts.delay_ms))?;
    Ok(GifSummary {
        frames: opts.frames,
        delay_ms: opts.delay_ms,
        bytes,
    })
}

pub fn card_file(input: &Path, output: &Path, opts: &CardOptions) -> ArtpostResult<()> {
    opts.validate()?;
    let img = open_image(input)?;
    tracing::info!(
        width = img.width(),
        height = img.height(),
        mode = crate::process::resize::mode_name(img.color()),
        "input"
    );
    let out = process_card(&img.to_rgba8(), opts)?;
    save_png(&DynamicImage::ImageRgba8(out), output)
}

pub fn icon_file(input: &Path, output: &Path, opts: &IconOptions) -> ArtpostResult<()> {
    opts.validate()?;
    let img = open_image(input)?;
    tracing::info!(width = img.width(), height = img.height(), "input");
    let out = process_icon(&img.to_rgb8(), opts)?;
    save_png(&DynamicImage::ImageRgb8(out), output)
}

/// Resize to a `size` x `size` square, keeping the input's channel layout.
pub fn favicon_file(input: &Path, output: &Path, size: u32) -> ArtpostResult<ImageInfo> {
    let img = open_image(input)?;
    let out = resize_exact(&img, size, size)?;
    save_png(&out, output)?;
    Ok(ImageInfo::of(&out))
}

pub fn inspect_file(input: &Path) -> ArtpostResult<ImageInfo> {
    let img = open_image(input)?;
    Ok(ImageInfo::of(&img))
}
