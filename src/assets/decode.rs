use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::foundation::error::{ArtpostError, ArtpostResult};

/// Open and decode an image file, format guessed from its contents.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn open_image(path: &Path) -> ArtpostResult<DynamicImage> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| ArtpostError::io(format!("open '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| ArtpostError::io(format!("read '{}': {e}", path.display())))?;
    let img = reader
        .decode()
        .map_err(|e| ArtpostError::decode(format!("decode '{}': {e}", path.display())))?;
    tracing::debug!(width = img.width(), height = img.height(), "image decoded");
    Ok(img)
}

pub fn decode_image(bytes: &[u8]) -> ArtpostResult<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| ArtpostError::decode(format!("decode image from memory: {e}")))
}

pub fn ensure_parent_dir(path: &Path) -> ArtpostResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ArtpostError::io(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Write `img` as PNG, creating parent directories as needed.
pub fn save_png(img: &DynamicImage, path: &Path) -> ArtpostResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| ArtpostError::encode(format!("write png '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "saved");
    Ok(())
}

pub fn file_size_bytes(path: &Path) -> ArtpostResult<u64> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| ArtpostError::io(format!("stat '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
