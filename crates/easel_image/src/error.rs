//! Image loading errors

use thiserror::Error;

/// Failure to turn an image reference into a drawable handle
#[derive(Error, Debug)]
pub enum ImageLoadError {
    /// Reading a local file failed
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be completed
    #[cfg(feature = "network")]
    #[error("Failed to fetch image: {0}")]
    Http(#[from] reqwest::Error),

    /// The blocking read or decode task did not finish
    #[cfg(feature = "network")]
    #[error("Image loading task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The server answered with a non-success status
    #[error("Image request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// A data URI payload was not valid base64
    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The bytes could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Data URI that is not base64-encoded image data
    #[error("Unsupported data URI: {0}")]
    UnsupportedDataUri(String),

    /// http(s) URL given but the `network` feature is disabled
    #[error("Network loading disabled, cannot fetch {0}")]
    NetworkDisabled(String),
}

/// Result type for image loading
pub type Result<T> = std::result::Result<T, ImageLoadError>;
