use image::RgbaImage;

use crate::{
    animate::draw::draw_glint,
    foundation::{
        error::{ArtpostError, ArtpostResult},
        math::luminance,
        rng::Rng64,
    },
    raster::composite::{alpha_composite, threshold_alpha},
};

/// Alpha above which a pixel counts as visible.
pub const VISIBLE_ALPHA: u8 = 128;
/// Minimum luminance for a glint anchor; keeps glints off dark wheels and shadows.
pub const MIN_GLINT_LUMINANCE: f64 = 60.0;

const DURATION_RANGE: (u32, u32) = (10, 18);
const SIZE_RANGE: (u32, u32) = (12, 25);
/// Fraction of a glint's life spent fading in.
const ATTACK: f64 = 0.2;

/// A single sparkle that fades in quickly, peaks, then fades out slowly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glint {
    pub x: u32,
    pub y: u32,
    /// First frame of the glint. Negative for wrapped copies of glints that
    /// cross the loop boundary.
    pub start: i64,
    pub duration: u32,
    pub size: u32,
}

impl Glint {
    /// Brightness in `[0, 1]` at `frame`; zero outside `[start, start + duration)`.
    pub fn brightness_at(&self, frame: i64) -> f64 {
        let t = frame - self.start;
        if t < 0 || t >= i64::from(self.duration) {
            return 0.0;
        }
        let progress = t as f64 / f64::from(self.duration);
        if progress < ATTACK {
            progress / ATTACK
        } else {
            1.0 - (progress - ATTACK) / (1.0 - ATTACK)
        }
    }
}

/// Settings for the glint animation.
#[derive(Clone, Debug)]
pub struct GlintOptions {
    pub frames: u32,
    /// Per-frame delay in milliseconds.
    pub delay_ms: u32,
    /// Roughly how many glints are visible at once.
    pub glints: u32,
    pub seed: u64,
    /// Upper bound on sampled anchor positions.
    pub candidates: usize,
}

impl Default for GlintOptions {
    fn default() -> Self {
        Self {
            frames: 60,
            delay_ms: 100,
            glints: 8,
            seed: 42,
            candidates: 200,
        }
    }
}

impl GlintOptions {
    pub fn validate(&self) -> ArtpostResult<()> {
        if self.frames == 0 {
            return Err(ArtpostError::validation("frames must be non-zero"));
        }
        if self.glints == 0 {
            return Err(ArtpostError::validation("glints must be non-zero"));
        }
        if self.candidates == 0 {
            return Err(ArtpostError::validation("candidates must be non-zero"));
        }
        Ok(())
    }
}

/// Rejection-sample up to `limit` anchor points on visible, reasonably bright pixels.
///
/// Makes at most `10 * limit` draws, so a mostly transparent or dark image may
/// yield fewer points (or none).
pub fn find_glint_positions(img: &RgbaImage, rng: &mut Rng64, limit: usize) -> Vec<(u32, u32)> {
    let (w, h) = img.dimensions();
    let mut out = Vec::new();
    if w == 0 || h == 0 {
        return out;
    }

    for _ in 0..limit.saturating_mul(10) {
        let y = rng.range_inclusive(0, h - 1);
        let x = rng.range_inclusive(0, w - 1);
        let px = img.get_pixel(x, y).0;
        if px[3] > VISIBLE_ALPHA && luminance([px[0], px[1], px[2]]) > MIN_GLINT_LUMINANCE {
            out.push((x, y));
            if out.len() >= limit {
                break;
            }
        }
    }
    out
}

/// Lay out `4 * active` glints at a regular stride over the loop.
///
/// A glint that runs past the last frame gets a second copy shifted back by
/// `frames`, so its tail shows at the start of the loop.
pub fn schedule_glints(
    positions: &[(u32, u32)],
    frames: u32,
    active: u32,
    rng: &mut Rng64,
) -> Vec<Glint> {
    if positions.is_empty() || frames == 0 || active == 0 {
        return Vec::new();
    }

    let frames_i = i64::from(frames);
    let spacing = (frames / active.saturating_mul(3)).max(1);
    let mut glints = Vec::new();
    for i in 0..active.saturating_mul(4) {
        let start = (i64::from(i) * i64::from(spacing)) % frames_i;
        let duration = rng.range_inclusive(DURATION_RANGE.0, DURATION_RANGE.1);
        let size = rng.range_inclusive(SIZE_RANGE.0, SIZE_RANGE.1);
        let Some(&(x, y)) = rng.choose(positions) else {
            break;
        };
        let glint = Glint {
            x,
            y,
            start,
            duration,
            size,
        };
        glints.push(glint);
        if start + i64::from(duration) > frames_i {
            glints.push(Glint {
                start: start - frames_i,
                ..glint
            });
        }
    }
    glints
}

/// Source image with every glint live at `frame` composited on top, alpha thresholded.
pub fn glint_frame(img: &RgbaImage, glints: &[Glint], frame: i64) -> ArtpostResult<RgbaImage> {
    let mut out = img.clone();
    let mut overlay = RgbaImage::new(img.width(), img.height());
    let mut any = false;
    for g in glints {
        let b = g.brightness_at(frame);
        if b > 0.0 {
            draw_glint(&mut overlay, g.x as i32, g.y as i32, g.size, b);
            any = true;
        }
    }
    if any {
        alpha_composite(&mut out, &overlay)?;
    }
    threshold_alpha(&mut out, VISIBLE_ALPHA);
    Ok(out)
}

/// Render the full looping glint animation.
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn render_glint_frames(img: &RgbaImage, opts: &GlintOptions) -> ArtpostResult<Vec<RgbaImage>> {
    opts.validate()?;

    let mut rng = Rng64::new(opts.seed);
    let positions = find_glint_positions(img, &mut rng, opts.candidates);
    tracing::info!(count = positions.len(), "found candidate glint positions");
    if positions.is_empty() {
        tracing::warn!("no visible bright pixels; frames will carry no glints");
    }

    let glints = schedule_glints(&positions, opts.frames, opts.glints, &mut rng);
    tracing::info!(count = glints.len(), "scheduled glint events");

    let mut frames = Vec::with_capacity(opts.frames as usize);
    for f in 0..opts.frames {
        frames.push(glint_frame(img, &glints, i64::from(f))?);
        if (f + 1) % 10 == 0 {
            tracing::info!(frame = f + 1, total = opts.frames, "rendered frame");
        }
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animate/glint.rs"]
mod tests;
