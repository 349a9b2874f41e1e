//! Easel Paint
//!
//! The drawing-surface side of Easel: the capability set a host 2D context must
//! provide, plus a recording implementation of it.
//!
//! # Features
//!
//! - `Surface` trait: state save/restore, fill/font/alignment mutators, text
//!   measurement, rect/text/image primitives, path building and clipping
//! - `PaintContext`: records every surface call as a `PaintCommand`
//! - CSS colour and font-shorthand parsing for the recording surface

pub mod color;
pub mod context;
pub mod error;
pub mod font;
pub mod path;
pub mod primitives;
pub mod surface;

pub use color::Color;
pub use context::{DrawState, PaintCommand, PaintContext};
pub use error::{PaintError, Result};
pub use font::Font;
pub use path::{Path, PathCommand, Point};
pub use primitives::Rect;
pub use surface::{Surface, TextAlign};
