use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut},
    rect::Rect,
};

use crate::foundation::math::linspace01;

const GLOW_RGB: [u8; 3] = [255, 230, 180];
const CORE_RGB: [u8; 3] = [255, 248, 220];
const CENTER_RGB: [u8; 3] = [255, 250, 230];

fn rgba(rgb: [u8; 3], a: f64) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], a.clamp(0.0, 255.0) as u8])
}

/// Horizontal and vertical bars through `(cx, cy)`, each `2 * d + 1` long and `width` thick.
fn draw_cross(overlay: &mut RgbaImage, cx: i32, cy: i32, d: i32, width: u32, color: Rgba<u8>) {
    let half = (width as i32 - 1) / 2;
    let len = (2 * d + 1) as u32;
    draw_filled_rect_mut(
        overlay,
        Rect::at(cx - d, cy - half).of_size(len, width),
        color,
    );
    draw_filled_rect_mut(
        overlay,
        Rect::at(cx - half, cy - d).of_size(width, len),
        color,
    );
}

/// Draw a four-pointed star at `(cx, cy)` into a transparent overlay.
///
/// Pixels are replaced, not blended: later strokes overwrite earlier ones, so
/// the overlay must be composited onto the frame afterwards. `brightness`
/// scales every layer's alpha; `size` is the nominal arm radius.
pub fn draw_glint(overlay: &mut RgbaImage, cx: i32, cy: i32, size: u32, brightness: f64) {
    if brightness <= 0.0 {
        return;
    }
    let alpha = (255.0 * brightness.min(1.0)).trunc();
    let size = f64::from(size);

    // Outer glow: long, faint, thick near the center.
    let glow_size = (size * 1.5) as i32;
    for t in linspace01(glow_size.max(4) as usize) {
        let d = (f64::from(glow_size) * t) as i32;
        let a = (alpha * 0.35 * (1.0 - t)).trunc();
        let w = ((3.0 * (1.0 - t)) as u32).max(1);
        draw_cross(overlay, cx, cy, d, w, rgba(GLOW_RGB, a));
    }

    // Bright core arms.
    let core_size = ((size * 0.7) as i32).max(2);
    for t in linspace01(core_size.max(3) as usize) {
        let d = (f64::from(core_size) * t) as i32;
        let a = (alpha * (1.0 - t * 0.4)).trunc();
        let w = ((2.0 * (1.0 - t)) as u32).max(1);
        draw_cross(overlay, cx, cy, d, w, rgba(CORE_RGB, a));
    }

    let r = ((size * 0.15) as i32).max(2);
    draw_filled_circle_mut(overlay, (cx, cy), r, rgba(CENTER_RGB, alpha));

    // Short, faint diagonals.
    let diag_size = ((size * 0.5) as i32).max(2);
    for t in linspace01(diag_size.max(3) as usize) {
        let d = (f64::from(diag_size) * t) as f32;
        let a = (alpha * 0.5 * (1.0 - t)).trunc();
        let color = rgba(CORE_RGB, a);
        let (x, y) = (cx as f32, cy as f32);
        draw_line_segment_mut(overlay, (x - d, y - d), (x + d, y + d), color);
        draw_line_segment_mut(overlay, (x + d, y - d), (x - d, y + d), color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/draw.rs"]
mod tests;
