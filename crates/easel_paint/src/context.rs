//! Paint context - a `Surface` that records what was drawn

use crate::color::Color;
use crate::error::{PaintError, Result};
use crate::font::Font;
use crate::path::{Path, PathCommand, Point};
use crate::primitives::Rect;
use crate::surface::{Surface, TextAlign};

/// A paint command recorded by [`PaintContext`]
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand<I> {
    Save,
    Restore,
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillText {
        text: String,
        position: Point,
        color: Color,
        font: Font,
        align: TextAlign,
    },
    BeginPath,
    ClosePath,
    Clip {
        path: Path,
    },
    DrawImage {
        image: I,
        rect: Rect,
        /// Clip paths in effect, see [`DrawState::clip`]
        clip: Vec<Path>,
    },
}

/// Drawing state captured by `save` and reinstated by `restore`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawState {
    pub fill: Color,
    pub font: Font,
    pub align: TextAlign,
    /// Every path clipped to since the state was saved; the clip region is
    /// their intersection, empty means unclipped
    pub clip: Vec<Path>,
}

impl DrawState {
    fn initial() -> Self {
        Self {
            fill: Color::BLACK,
            ..Default::default()
        }
    }
}

/// Recording surface.
///
/// Every call is appended to a command list so callers (and tests) can
/// inspect exactly what reached the surface and in which order.
pub struct PaintContext<I> {
    commands: Vec<PaintCommand<I>>,
    state: DrawState,
    state_stack: Vec<DrawState>,
    current_path: Path,
}

impl<I: Clone> PaintContext<I> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            state: DrawState::initial(),
            state_stack: Vec::new(),
            current_path: Path::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand<I>] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand<I>> {
        std::mem::take(&mut self.commands)
    }

    /// Current drawing state
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Number of saved states not yet restored
    pub fn depth(&self) -> usize {
        self.state_stack.len()
    }

    /// Text of every `FillText` command, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every `DrawImage` command's image, in order
    pub fn images(&self) -> Vec<&I> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::DrawImage { image, .. } => Some(image),
                _ => None,
            })
            .collect()
    }
}

impl<I: Clone> Default for PaintContext<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone> Surface for PaintContext<I> {
    type Image = I;
    type Error = PaintError;

    // === State ===

    fn save(&mut self) {
        self.state_stack.push(self.state.clone());
        self.commands.push(PaintCommand::Save);
    }

    fn restore(&mut self) {
        match self.state_stack.pop() {
            Some(state) => {
                self.state = state;
                self.commands.push(PaintCommand::Restore);
            }
            None => tracing::trace!("restore with empty state stack ignored"),
        }
    }

    fn set_fill_style(&mut self, style: &str) -> Result<()> {
        self.state.fill = Color::parse_css(style)?;
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<()> {
        self.state.font = Font::parse(font)?;
        Ok(())
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    // === Text ===

    fn measure_text(&self, text: &str) -> f32 {
        self.state.font.measure(text)
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(PaintCommand::FillText {
            text: text.to_string(),
            position: Point::new(x, y),
            color: self.state.fill,
            font: self.state.font.clone(),
            align: self.state.align,
        });
    }

    // === Shapes and paths ===

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(PaintCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            color: self.state.fill,
        });
    }

    fn begin_path(&mut self) {
        self.current_path.clear();
        self.commands.push(PaintCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.current_path.push(PathCommand::Close);
        self.commands.push(PaintCommand::ClosePath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.current_path.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        self.current_path.push(PathCommand::Arc {
            center: Point::new(cx, cy),
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn clip(&mut self) {
        let path = self.current_path.clone();
        self.state.clip.push(path.clone());
        self.commands.push(PaintCommand::Clip { path });
    }

    // === Images ===

    fn draw_image(&mut self, image: &I, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        let rect = Rect::new(x, y, width, height);
        if !rect.is_finite() {
            return Err(PaintError::NonFiniteGeometry {
                x,
                y,
                width,
                height,
            });
        }
        self.commands.push(PaintCommand::DrawImage {
            image: image.clone(),
            rect,
            clip: self.state.clip.clone(),
        });
        Ok(())
    }
}
