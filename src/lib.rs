//! artpost post-processes generated art for the game's asset pipeline.
//!
//! Each entry point is a single pass over one in-memory raster:
//!
//! - **Card art**: flood-fill background removal with a soft alpha edge, crop to
//!   content, fit onto a fixed transparent canvas ([`process_card`]).
//! - **Icons**: detect the corner background, crop to content, pad to a square
//!   and resize ([`process_icon`]).
//! - **Animations**: sparkling glints ([`render_glint_frames`]) or a hue shimmer
//!   confined to colorful pixels ([`render_shimmer_frames`]), written as
//!   looping GIFs ([`write_gif`]).
//! - **Resizing**: exact-size Lanczos resizes such as the 48x48 favicon.
//!
//! Nothing is shared between runs and nothing runs concurrently.
#![forbid(unsafe_code)]

mod animate;
mod assets;
mod encode;
mod foundation;
mod process;
mod raster;

pub mod pipeline;

pub use animate::draw::draw_glint;
pub use animate::glint::{
    Glint, GlintOptions, MIN_GLINT_LUMINANCE, VISIBLE_ALPHA, find_glint_positions, glint_frame,
    render_glint_frames, schedule_glints,
};
pub use animate::shimmer::{
    MIN_SATURATION, ShimmerOptions, hsv_map, render_shimmer_frames, saturation_mask, shimmer_frame,
};
pub use assets::decode::{decode_image, ensure_parent_dir, file_size_bytes, open_image, save_png};
pub use encode::gif_writer::{GifConfig, write_gif};
pub use foundation::core::{BBox, Rgb};
pub use foundation::error::{ArtpostError, ArtpostResult};
pub use foundation::math::{color_distance, luminance};
pub use foundation::rng::Rng64;
pub use process::background::{
    corner_color, distance_map, flood_fill_mask, remove_background, soft_edge_alpha,
};
pub use process::card::{CardOptions, crop_to_content, fit_size, fit_to_canvas, process_card};
pub use process::icon::{
    IconOptions, content_bounds, content_mask, detect_background, pad_to_square, process_icon,
};
pub use process::resize::{
    FAVICON_SIZE, ImageInfo, mode_name, resize_exact, resize_favicon, resize_premultiplied,
};
pub use raster::bounds::{alpha_bbox, mask_bbox};
pub use raster::composite::{
    alpha_composite, over, paste_masked, premultiply, premultiply_image, threshold_alpha,
    unpremultiply, unpremultiply_image,
};
pub use raster::hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
