//! Decoded image handles

use std::sync::Arc;

use crate::error::Result;
use crate::source::ImageFormat;

/// A decoded RGBA8 image ready to hand to a surface.
///
/// Pixels are shared, so clones are cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
    anonymous: bool,
}

impl ImageData {
    /// Decode encoded image bytes, using `hint` when the format is known up front
    pub fn decode(bytes: &[u8], hint: Option<ImageFormat>) -> Result<Self> {
        let decoded = match hint {
            Some(format) => image::load_from_memory_with_format(bytes, format.into())?,
            None => image::load_from_memory(bytes)?,
        };
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(rgba.into_raw(), width, height))
    }

    /// Wrap pre-decoded RGBA pixel data (4 bytes per pixel, row-major)
    pub fn from_rgba(pixels: impl Into<Arc<[u8]>>, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: pixels.into(),
            anonymous: false,
        }
    }

    /// Mark whether the image was requested in cross-origin anonymous mode
    pub fn with_anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True when the image was fetched without credentials
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }
}
