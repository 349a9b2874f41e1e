//! Drawing instructions
//!
//! A [`Part`] is one declarative drawing instruction. Callers build a slice of
//! them per draw call; the renderer only reads them.

use easel_paint::{Rect, Surface, TextAlign};

/// Clip callback: receives the surface (with a fresh path begun) and the part
/// being drawn, and is expected to build a path and call `clip`
pub type ClipFn<'a, S, P> = Box<dyn Fn(&mut S, &P) + 'a>;

/// One drawing instruction
pub enum Part<'a, S: Surface> {
    Text(TextPart),
    Rect(RectPart),
    /// Image fetched from a URL through the renderer's loader
    Image(ImagePart<'a, S>),
    /// Image the caller has already decoded
    ImageElm(ImageElmPart<'a, S>),
}

impl<S: Surface> Part<'_, S> {
    /// True for the variants drawn in the deferred image phase
    pub fn is_image(&self) -> bool {
        matches!(self, Part::Image(_) | Part::ImageElm(_))
    }
}

impl<S: Surface> From<TextPart> for Part<'_, S> {
    fn from(part: TextPart) -> Self {
        Part::Text(part)
    }
}

impl<S: Surface> From<RectPart> for Part<'_, S> {
    fn from(part: RectPart) -> Self {
        Part::Rect(part)
    }
}

impl<'a, S: Surface> From<ImagePart<'a, S>> for Part<'a, S> {
    fn from(part: ImagePart<'a, S>) -> Self {
        Part::Image(part)
    }
}

impl<'a, S: Surface> From<ImageElmPart<'a, S>> for Part<'a, S> {
    fn from(part: ImageElmPart<'a, S>) -> Self {
        Part::ImageElm(part)
    }
}

// ============================================================================
// Text
// ============================================================================

/// A run of text, optionally wrapped to a width
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextPart {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Wrap width; wrapping needs `line_height` too
    pub width: Option<f32>,
    pub line_height: Option<f32>,
    /// Draw only the first wrapped line, ellipsized when text overflowed
    pub single_line: bool,
    /// Fill color, `#000` when unset
    pub color: Option<String>,
    /// Font shorthand; the surface's current font is kept when unset
    pub font: Option<String>,
    pub align: TextAlign,
}

impl TextPart {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            ..Default::default()
        }
    }

    /// Wrap to `width`, advancing `line_height` per line
    pub fn wrap(mut self, width: f32, line_height: f32) -> Self {
        self.width = Some(width);
        self.line_height = Some(line_height);
        self
    }

    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// `(width, line_height)` when both are set to a non-zero number.
    ///
    /// A negative line height stacks the wrapped lines upwards.
    pub fn wrap_box(&self) -> Option<(f32, f32)> {
        let set = |value: Option<f32>| value.filter(|v| *v != 0.0 && !v.is_nan());
        Some((set(self.width)?, set(self.line_height)?))
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A filled rectangle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectPart {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Fill color, `#000` when unset
    pub background_color: Option<String>,
}

impl RectPart {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            background_color: None,
        }
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

// ============================================================================
// Images
// ============================================================================

/// Destination box of an image part
pub trait ImageBounds {
    fn bounds(&self) -> Rect;
}

/// An image loaded from `url` when the parts are drawn
pub struct ImagePart<'a, S: Surface> {
    pub url: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub clip: Option<ClipFn<'a, S, ImagePart<'a, S>>>,
}

impl<'a, S: Surface> ImagePart<'a, S> {
    pub fn new(url: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            url: url.into(),
            x,
            y,
            width,
            height,
            clip: None,
        }
    }

    pub fn clip(mut self, clip: impl Fn(&mut S, &ImagePart<'a, S>) + 'a) -> Self {
        self.clip = Some(Box::new(clip));
        self
    }

    /// Clip to the circle inscribed in the part's box
    pub fn clip_circle(self) -> Self
    where
        S: 'a,
    {
        self.clip(|surface: &mut S, part: &ImagePart<'a, S>| {
            crate::clip::circle_clip(surface, part)
        })
    }
}

impl<S: Surface> ImageBounds for ImagePart<'_, S> {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// An already-decoded image; the caller keeps ownership of the handle
pub struct ImageElmPart<'a, S: Surface> {
    pub image: &'a S::Image,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub clip: Option<ClipFn<'a, S, ImageElmPart<'a, S>>>,
}

impl<'a, S: Surface> ImageElmPart<'a, S> {
    pub fn new(image: &'a S::Image, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            image,
            x,
            y,
            width,
            height,
            clip: None,
        }
    }

    pub fn clip(mut self, clip: impl Fn(&mut S, &ImageElmPart<'a, S>) + 'a) -> Self {
        self.clip = Some(Box::new(clip));
        self
    }

    /// Clip to the circle inscribed in the part's box
    pub fn clip_circle(self) -> Self
    where
        S: 'a,
    {
        self.clip(|surface: &mut S, part: &ImageElmPart<'a, S>| {
            crate::clip::circle_clip(surface, part)
        })
    }
}

impl<S: Surface> ImageBounds for ImageElmPart<'_, S> {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_paint::PaintContext;

    type Ctx = PaintContext<u8>;

    #[test]
    fn test_text_builder() {
        let part = TextPart::new("hello", 1.0, 2.0)
            .wrap(100.0, 20.0)
            .single_line()
            .color("red")
            .font("12px serif")
            .align(TextAlign::Center);

        assert_eq!(part.wrap_box(), Some((100.0, 20.0)));
        assert!(part.single_line);
        assert_eq!(part.color.as_deref(), Some("red"));
        assert_eq!(part.font.as_deref(), Some("12px serif"));
        assert_eq!(part.align, TextAlign::Center);
    }

    #[test]
    fn test_wrap_box_needs_both_dimensions() {
        let mut part = TextPart::new("hello", 0.0, 0.0);
        part.width = Some(50.0);
        assert_eq!(part.wrap_box(), None);

        part.line_height = Some(0.0);
        assert_eq!(part.wrap_box(), None);

        part.line_height = Some(f32::NAN);
        assert_eq!(part.wrap_box(), None);

        part.line_height = Some(12.0);
        assert_eq!(part.wrap_box(), Some((50.0, 12.0)));
    }

    #[test]
    fn test_wrap_box_keeps_negative_dimensions() {
        let part = TextPart::new("hello", 0.0, 0.0).wrap(50.0, -12.0);
        assert_eq!(part.wrap_box(), Some((50.0, -12.0)));

        let part = TextPart::new("hello", 0.0, 0.0).wrap(-5.0, 12.0);
        assert_eq!(part.wrap_box(), Some((-5.0, 12.0)));
    }

    #[test]
    fn test_part_conversions() {
        let handle = 7u8;
        let parts: Vec<Part<'_, Ctx>> = vec![
            TextPart::new("a", 0.0, 0.0).into(),
            RectPart::new(0.0, 0.0, 1.0, 1.0).background("#fff").into(),
            ImagePart::new("a.png", 0.0, 0.0, 1.0, 1.0).into(),
            ImageElmPart::new(&handle, 0.0, 0.0, 1.0, 1.0).into(),
        ];
        let images: Vec<bool> = parts.iter().map(Part::is_image).collect();
        assert_eq!(images, vec![false, false, true, true]);
    }

    #[test]
    fn test_image_bounds() {
        let handle = 1u8;
        let url = ImagePart::<Ctx>::new("a.png", 1.0, 2.0, 3.0, 4.0).clip_circle();
        let elm = ImageElmPart::<Ctx>::new(&handle, 5.0, 6.0, 7.0, 8.0);
        assert_eq!(url.bounds(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert!(url.clip.is_some());
        assert_eq!(elm.bounds(), Rect::new(5.0, 6.0, 7.0, 8.0));
        assert!(elm.clip.is_none());
    }
}
