use std::{fs::File, io::BufWriter, io::Write as _, path::Path};

use image::RgbaImage;

use crate::{
    assets::decode::{ensure_parent_dir, file_size_bytes},
    foundation::error::{ArtpostError, ArtpostResult},
};

/// NeuQuant sampling factor: 1 is slowest/best, 30 fastest.
const QUANTIZE_SPEED: i32 = 10;

#[derive(Clone, Debug)]
pub struct GifConfig {
    /// Per-frame delay in milliseconds. GIF stores centiseconds, so this is rounded down to 10ms.
    pub delay_ms: u32,
    /// `None` loops forever.
    pub repeat: Option<u16>,
}

impl GifConfig {
    pub fn looping(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            repeat: None,
        }
    }

    fn delay_cs(&self) -> u16 {
        (self.delay_ms / 10).min(u32::from(u16::MAX)) as u16
    }
}

fn encode_err(path: &Path, e: impl std::fmt::Display) -> ArtpostError {
    ArtpostError::encode(format!("write gif '{}': {e}", path.display()))
}

/// Write `frames` as an animated GIF and return the file size in bytes.
///
/// Each frame gets its own adaptive palette; fully transparent pixels map to
/// the transparent index, so frames should already be alpha-thresholded.
/// Frames are disposed to background so transparent regions never show
/// leftovers from the previous frame.
#[tracing::instrument(skip_all, fields(path = %path.display(), count = frames.len()))]
pub fn write_gif(path: &Path, frames: &[RgbaImage], cfg: &GifConfig) -> ArtpostResult<u64> {
    let Some(first) = frames.first() else {
        return Err(ArtpostError::validation("gif needs at least one frame"));
    };
    let (w, h) = first.dimensions();
    if frames.iter().any(|f| f.dimensions() != (w, h)) {
        return Err(ArtpostError::validation(
            "all gif frames must share the same dimensions",
        ));
    }
    let (Ok(w16), Ok(h16)) = (u16::try_from(w), u16::try_from(h)) else {
        return Err(ArtpostError::validation(format!(
            "gif frames are limited to 65535x65535, got {w}x{h}"
        )));
    };

    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| encode_err(path, e))?;
    let mut encoder =
        gif::Encoder::new(BufWriter::new(file), w16, h16, &[]).map_err(|e| encode_err(path, e))?;
    let repeat = match cfg.repeat {
        None => gif::Repeat::Infinite,
        Some(n) => gif::Repeat::Finite(n),
    };
    encoder
        .set_repeat(repeat)
        .map_err(|e| encode_err(path, e))?;

    for frame in frames {
        let mut rgba = frame.as_raw().clone();
        // One shared key color for every transparent pixel.
        for px in rgba.chunks_exact_mut(4) {
            if px[3] == 0 {
                px.fill(0);
            }
        }
        let mut gif_frame = gif::Frame::from_rgba_speed(w16, h16, &mut rgba, QUANTIZE_SPEED);
        gif_frame.delay = cfg.delay_cs();
        gif_frame.dispose = gif::DisposalMethod::Background;
        encoder
            .write_frame(&gif_frame)
            .map_err(|e| encode_err(path, e))?;
    }

    let mut writer = encoder.into_inner().map_err(|e| encode_err(path, e))?;
    writer.flush().map_err(|e| encode_err(path, e))?;
    drop(writer);

    let bytes = file_size_bytes(path)?;
    tracing::info!(kb = bytes / 1024, "saved gif");
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif_writer.rs"]
mod tests;
