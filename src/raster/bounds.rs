use image::RgbaImage;

use crate::foundation::core::BBox;

/// Bounding box of `true` cells in a row-major `width` x `height` mask.
pub fn mask_bbox(mask: &[bool], width: u32, height: u32) -> Option<BBox> {
    debug_assert_eq!(mask.len(), width as usize * height as usize);
    let mut bbox: Option<BBox> = None;
    for y in 0..height {
        let row = &mask[(y * width) as usize..((y + 1) * width) as usize];
        let Some(first) = row.iter().position(|&m| m) else {
            continue;
        };
        let last = row.iter().rposition(|&m| m).unwrap_or(first);
        let (first, last) = (first as u32, last as u32);
        bbox = Some(match bbox {
            None => BBox {
                x0: first,
                y0: y,
                x1: last + 1,
                y1: y + 1,
            },
            Some(b) => BBox {
                x0: b.x0.min(first),
                y0: b.y0,
                x1: b.x1.max(last + 1),
                y1: y + 1,
            },
        });
    }
    bbox
}

/// Bounding box of pixels with non-zero alpha, or `None` for a fully transparent image.
pub fn alpha_bbox(img: &RgbaImage) -> Option<BBox> {
    let mask: Vec<bool> = img.pixels().map(|p| p.0[3] != 0).collect();
    mask_bbox(&mask, img.width(), img.height())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bounds.rs"]
mod tests;
