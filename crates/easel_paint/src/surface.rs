//! The drawing-surface capability set
//!
//! A `Surface` is whatever the host hands us to draw on: an HTML canvas
//! binding, a software rasterizer, or the recording [`PaintContext`].
//! Easel only composes these primitives; it never rasterizes by itself.
//!
//! [`PaintContext`]: crate::context::PaintContext

/// Horizontal text alignment relative to the `x` passed to `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A host 2D drawing context.
///
/// State-mutating calls (`set_*`, `clip`) affect everything drawn until the
/// matching `restore`. Style and font strings are passed through verbatim;
/// rejecting them is up to the implementation.
pub trait Surface {
    /// Already-decoded image handle accepted by `draw_image`
    type Image;
    /// Error raised by fallible drawing calls
    type Error: std::error::Error + Send + Sync + 'static;

    // === State ===

    /// Push the current drawing state (styles, font, alignment, clip)
    fn save(&mut self);
    /// Pop the most recently saved drawing state
    fn restore(&mut self);

    fn set_fill_style(&mut self, style: &str) -> Result<(), Self::Error>;
    fn set_font(&mut self, font: &str) -> Result<(), Self::Error>;
    fn set_text_align(&mut self, align: TextAlign);

    // === Text ===

    /// Rendered width of `text` in the current font
    fn measure_text(&self, text: &str) -> f32;
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    // === Shapes and paths ===

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    );
    /// Intersect the clip region with the current path
    fn clip(&mut self);

    // === Images ===

    /// Draw `image` scaled into the destination rectangle
    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), Self::Error>;
}
