//! Easel Parts
//!
//! Draws a declarative list of parts (text, rectangles, images) onto any
//! [`Surface`].
//!
//! # Features
//!
//! - Text with optional width-constrained wrapping and single-line ellipsis
//! - Filled rectangles
//! - Images from URLs or caller-decoded handles, resolved concurrently
//! - Per-image clip callbacks, with [`circle_clip`] provided
//! - Every part drawn inside its own save/restore scope
//!
//! # Example
//!
//! ```ignore
//! use easel_parts::{draw_parts, ImagePart, Part, RectPart, TextPart};
//! use easel_image::UrlLoader;
//!
//! let parts: Vec<Part<'_, _>> = vec![
//!     RectPart::new(0.0, 0.0, 300.0, 120.0).background("#fff").into(),
//!     TextPart::new("A long caption that wraps", 12.0, 24.0)
//!         .wrap(200.0, 18.0)
//!         .font("14px sans-serif")
//!         .into(),
//!     ImagePart::new("avatar.png", 220.0, 10.0, 64.0, 64.0).clip_circle().into(),
//! ];
//! draw_parts(&mut surface, &parts, &UrlLoader::new()?).await?;
//! ```

pub mod clip;
pub mod config;
pub mod error;
pub mod part;
pub mod render;
pub mod wrap;

pub use clip::circle_clip;
pub use config::RenderConfig;
pub use error::{ConfigError, ImagePartError};
pub use part::{ClipFn, ImageBounds, ImageElmPart, ImagePart, Part, RectPart, TextPart};
pub use render::{draw_parts, PartRenderer};
pub use wrap::wrap;

pub use easel_image::{ImageLoadError, ImageLoader};
pub use easel_paint::{Surface, TextAlign};
