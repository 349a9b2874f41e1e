//! Error types

use easel_image::ImageLoadError;
use thiserror::Error;

/// Why a single image part was skipped. Logged, never returned.
#[derive(Error, Debug)]
pub enum ImagePartError<E: std::error::Error + 'static> {
    #[error("image failed to load: {0}")]
    Load(#[from] ImageLoadError),

    #[error("image failed to draw: {0}")]
    Draw(#[source] E),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid render config: {0}")]
    Parse(#[from] toml::de::Error),
}
