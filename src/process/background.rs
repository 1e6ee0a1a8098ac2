//! Border-seeded flood fill background removal.
//!
//! Only pixels connected to the image border through a chain of
//! background-colored pixels are cleared, so enclosed regions that happen to
//! match the background (window panes, highlights) stay opaque.

use std::collections::VecDeque;

use image::RgbaImage;

use crate::foundation::{
    error::{ArtpostError, ArtpostResult},
    math::color_distance,
};

/// Color of the top-left pixel, used as the reference background color.
pub fn corner_color(img: &RgbaImage) -> [f64; 3] {
    let px = img.get_pixel(0, 0).0;
    [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])]
}

/// Per-pixel RGB distance from `bg`, row-major.
pub fn distance_map(img: &RgbaImage, bg: [f64; 3]) -> Vec<f64> {
    img.pixels()
        .map(|p| color_distance([p.0[0], p.0[1], p.0[2]], bg))
        .collect()
}

/// Row-major background mask: `true` where the pixel is reachable from the
/// border through 4-connected pixels within `tolerance` of the corner color.
pub fn flood_fill_mask(img: &RgbaImage, tolerance: f64) -> Vec<bool> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let diff = distance_map(img, corner_color(img));
    let (w, h) = (w as usize, h as usize);

    let mut visited = vec![false; w * h];
    let mut background = vec![false; w * h];
    let mut queue = VecDeque::new();

    let mut seed = |x: usize, y: usize, queue: &mut VecDeque<(usize, usize)>| {
        let i = y * w + x;
        if !visited[i] && diff[i] <= tolerance {
            visited[i] = true;
            background[i] = true;
            queue.push_back((x, y));
        }
    };
    for x in 0..w {
        seed(x, 0, &mut queue);
        seed(x, h - 1, &mut queue);
    }
    for y in 0..h {
        seed(0, y, &mut queue);
        seed(w - 1, y, &mut queue);
    }

    while let Some((cx, cy)) = queue.pop_front() {
        let neighbors = [
            (cx, cy.wrapping_sub(1)),
            (cx, cy + 1),
            (cx.wrapping_sub(1), cy),
            (cx + 1, cy),
        ];
        for (nx, ny) in neighbors {
            if nx >= w || ny >= h {
                continue;
            }
            let i = ny * w + nx;
            if visited[i] {
                continue;
            }
            visited[i] = true;
            if diff[i] <= tolerance {
                background[i] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    background
}

/// Alpha for a pixel outside the flood region at distance `dist` from the
/// background color. Ramps from 0 at `0.5 * fuzz` to 255 at `2 * fuzz`.
pub fn soft_edge_alpha(dist: f64, fuzz: f64) -> u8 {
    if dist >= fuzz * 2.0 {
        return 255;
    }
    ((dist - fuzz * 0.5) / (fuzz * 1.5) * 255.0).clamp(0.0, 255.0) as u8
}

/// Replace the alpha channel with flood-fill transparency plus a soft edge band.
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn remove_background(img: &RgbaImage, fuzz: f64) -> ArtpostResult<RgbaImage> {
    if !fuzz.is_finite() || fuzz <= 0.0 {
        return Err(ArtpostError::validation("fuzz must be > 0"));
    }

    let mut out = img.clone();
    if img.width() == 0 || img.height() == 0 {
        return Ok(out);
    }

    tracing::debug!("flood filling from edges");
    let mask = flood_fill_mask(img, fuzz);
    let dist = distance_map(img, corner_color(img));

    let mut cleared = 0usize;
    for ((px, &is_bg), &d) in out.pixels_mut().zip(&mask).zip(&dist) {
        px.0[3] = if is_bg {
            cleared += 1;
            0
        } else {
            soft_edge_alpha(d, fuzz)
        };
    }
    tracing::info!(cleared, total = mask.len(), "background removed");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/process/background.rs"]
mod tests;
