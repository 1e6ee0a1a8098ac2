use crate::foundation::error::{ArtpostError, ArtpostResult};

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `"R,G,B"` with each component in `0..=255`.
    pub fn parse(s: &str) -> ArtpostResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ArtpostError::validation(format!(
                "color '{s}' must have exactly three components (R,G,B)"
            )));
        }

        let mut out = [0u8; 3];
        for (slot, part) in out.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| {
                ArtpostError::validation(format!(
                    "color component '{part}' in '{s}' is not an integer in 0..=255"
                ))
            })?;
        }
        Ok(Self(out))
    }
}

impl std::str::FromStr for Rgb {
    type Err = ArtpostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(c: Rgb) -> Self {
        image::Rgb(c.0)
    }
}

/// Axis-aligned pixel rectangle. `x1`/`y1` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BBox {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: width,
            y1: height,
        }
    }

    pub fn width(self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Grow by `padding` on every side, clamped to a `width` x `height` image.
    pub fn pad(self, padding: u32, width: u32, height: u32) -> Self {
        Self {
            x0: self.x0.saturating_sub(padding),
            y0: self.y0.saturating_sub(padding),
            x1: self.x1.saturating_add(padding).min(width),
            y1: self.y1.saturating_add(padding).min(height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
