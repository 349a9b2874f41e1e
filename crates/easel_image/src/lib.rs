//! Easel Image
//!
//! Resolves image references into decoded, drawable handles.
//!
//! # Features
//!
//! - Load images from file paths, data URIs and (with the `network` feature) http(s) URLs
//! - Support for PNG, JPEG, GIF, WebP, BMP formats
//! - Cross-origin anonymous mode: credentials are withheld and the handle is tagged
//! - No caching and no cancellation: every `load` fetches and decodes afresh
//!
//! # Example
//!
//! ```ignore
//! use easel_image::{ImageLoader, UrlLoader};
//!
//! let loader = UrlLoader::new()?;
//! let avatar = loader.load("https://example.com/avatar.png", true).await?;
//! ```

mod data;
mod error;
mod loader;
mod source;

pub use data::ImageData;
pub use error::{ImageLoadError, Result};
pub use loader::{ImageLoader, LoaderConfig, UrlLoader};
pub use source::{ImageFormat, ImageSource};

/// Load `url` once with a default [`UrlLoader`]
pub async fn load(url: &str, anonymous: bool) -> Result<ImageData> {
    UrlLoader::new()?.load(url, anonymous).await
}
