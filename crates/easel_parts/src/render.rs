//! Part renderer
//!
//! Text and rect parts are drawn immediately, in slice order. Image parts are
//! deferred: once the synchronous pass is done every image is resolved
//! concurrently and drawn as soon as its handle is ready, so images always land
//! on top of the synchronous parts and in no particular order among themselves.
//!
//! Errors from text and rect drawing abort the call. Image failures only skip
//! that image and are reported through `tracing`.

use easel_image::{ImageLoadError, ImageLoader};
use easel_paint::Surface;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::RenderConfig;
use crate::error::ImagePartError;
use crate::part::{ImageBounds, ImageElmPart, ImagePart, Part, RectPart, TextPart};
use crate::wrap::wrap;

/// Draws part slices with a given image loader
pub struct PartRenderer<L> {
    loader: L,
    config: RenderConfig,
}

impl<L: ImageLoader> PartRenderer<L> {
    pub fn new(loader: L) -> Self {
        Self::with_config(loader, RenderConfig::default())
    }

    pub fn with_config(loader: L, config: RenderConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Draw `parts` onto `surface`.
    ///
    /// Resolves once every image part has been drawn or has failed. Only
    /// errors from text and rect parts are returned; on such an error the
    /// remaining parts, images included, are not drawn.
    pub async fn draw_parts<S>(&self, surface: &mut S, parts: &[Part<'_, S>]) -> Result<(), S::Error>
    where
        S: Surface<Image = L::Image>,
    {
        tracing::debug!(parts = parts.len(), "drawing parts");

        for part in parts {
            match part {
                Part::Text(text) => self.draw_text(surface, text)?,
                Part::Rect(rect) => self.draw_rect(surface, rect)?,
                Part::Image(_) | Part::ImageElm(_) => {}
            }
        }

        self.draw_images(surface, parts).await;
        Ok(())
    }

    fn draw_text<S: Surface>(&self, surface: &mut S, part: &TextPart) -> Result<(), S::Error> {
        if part.text.is_empty() {
            return Ok(());
        }

        scoped(surface, |surface| -> Result<(), S::Error> {
            surface.set_fill_style(fill_or(part.color.as_deref(), &self.config.default_fill))?;
            if let Some(font) = non_empty(part.font.as_deref()) {
                surface.set_font(font)?;
            }
            surface.set_text_align(part.align);

            let Some((width, line_height)) = part.wrap_box() else {
                surface.fill_text(&part.text, part.x, part.y);
                return Ok(());
            };

            let lines = wrap(&*surface, &part.text, width);
            if part.single_line {
                let line = first_line(&lines, &self.config.ellipsis);
                surface.fill_text(&line, part.x, part.y);
            } else {
                for (index, line) in lines.iter().enumerate() {
                    surface.fill_text(line, part.x, part.y + index as f32 * line_height);
                }
            }
            Ok(())
        })
    }

    fn draw_rect<S: Surface>(&self, surface: &mut S, part: &RectPart) -> Result<(), S::Error> {
        scoped(surface, |surface| -> Result<(), S::Error> {
            surface.set_fill_style(fill_or(
                part.background_color.as_deref(),
                &self.config.default_fill,
            ))?;
            surface.fill_rect(part.x, part.y, part.width, part.height);
            Ok(())
        })
    }

    async fn draw_images<S>(&self, surface: &mut S, parts: &[Part<'_, S>])
    where
        S: Surface<Image = L::Image>,
    {
        let anonymous = self.config.anonymous_images;
        let mut pending: FuturesUnordered<_> = parts
            .iter()
            .enumerate()
            .filter_map(|(index, part)| ImageRef::from_part(part).map(|image| (index, image)))
            .map(|(index, image)| async move {
                let resolved = image.resolve(&self.loader, anonymous).await;
                (index, image, resolved)
            })
            .collect();

        if pending.is_empty() {
            return;
        }
        tracing::debug!(images = pending.len(), "resolving images");

        while let Some((index, image, resolved)) = pending.next().await {
            let outcome = resolved
                .map_err(ImagePartError::Load)
                .and_then(|handle| {
                    draw_image(surface, &image, handle.get()).map_err(ImagePartError::Draw)
                });

            if let Err(error) = outcome {
                tracing::warn!(index, source = image.describe(), %error, "skipping image part");
            }
        }
    }
}

/// Draw `parts` with the default configuration
pub async fn draw_parts<S, L>(surface: &mut S, parts: &[Part<'_, S>], loader: &L) -> Result<(), S::Error>
where
    L: ImageLoader,
    S: Surface<Image = L::Image>,
{
    PartRenderer::new(loader).draw_parts(surface, parts).await
}

/// Run `draw` between `save` and `restore`, restoring on every path
fn scoped<S: Surface, T>(surface: &mut S, draw: impl FnOnce(&mut S) -> T) -> T {
    surface.save();
    let result = draw(surface);
    surface.restore();
    result
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn fill_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    non_empty(value).unwrap_or(default)
}

/// The line drawn in single-line mode.
///
/// When the text overflowed onto more lines, the first line loses as many
/// characters as `ellipsis` has and gets `ellipsis` appended. The result can
/// be wider than the wrap width.
fn first_line(lines: &[String], ellipsis: &str) -> String {
    match lines {
        [] => String::new(),
        [only] => only.clone(),
        [first, ..] => {
            let keep = first
                .chars()
                .count()
                .saturating_sub(ellipsis.chars().count());
            let mut line: String = first.chars().take(keep).collect();
            line.push_str(ellipsis);
            line
        }
    }
}

// ============================================================================
// Image phase
// ============================================================================

/// An image part borrowed from the caller's slice
enum ImageRef<'p, 'a, S: Surface> {
    Url(&'p ImagePart<'a, S>),
    Elm(&'p ImageElmPart<'a, S>),
}

/// A drawable handle: freshly loaded, or borrowed from the caller
enum Resolved<'p, I> {
    Loaded(I),
    Borrowed(&'p I),
}

impl<I> Resolved<'_, I> {
    fn get(&self) -> &I {
        match self {
            Resolved::Loaded(image) => image,
            Resolved::Borrowed(image) => image,
        }
    }
}

impl<'p, 'a, S: Surface> ImageRef<'p, 'a, S> {
    fn from_part(part: &'p Part<'a, S>) -> Option<Self> {
        match part {
            Part::Image(image) => Some(ImageRef::Url(image)),
            Part::ImageElm(image) => Some(ImageRef::Elm(image)),
            Part::Text(_) | Part::Rect(_) => None,
        }
    }

    async fn resolve<L>(
        &self,
        loader: &L,
        anonymous: bool,
    ) -> Result<Resolved<'p, S::Image>, ImageLoadError>
    where
        L: ImageLoader<Image = S::Image>,
    {
        match *self {
            ImageRef::Url(part) => loader.load(&part.url, anonymous).await.map(Resolved::Loaded),
            ImageRef::Elm(part) => Ok(Resolved::Borrowed(part.image)),
        }
    }

    fn bounds(&self) -> easel_paint::Rect {
        match self {
            ImageRef::Url(part) => part.bounds(),
            ImageRef::Elm(part) => part.bounds(),
        }
    }

    /// Open a path, let the part's callback build and apply its clip, close the path
    fn apply_clip(&self, surface: &mut S) {
        match self {
            ImageRef::Url(part) => {
                if let Some(clip) = &part.clip {
                    surface.begin_path();
                    clip(surface, *part);
                    surface.close_path();
                }
            }
            ImageRef::Elm(part) => {
                if let Some(clip) = &part.clip {
                    surface.begin_path();
                    clip(surface, *part);
                    surface.close_path();
                }
            }
        }
    }

    fn describe(&self) -> &str {
        match self {
            ImageRef::Url(part) => &part.url,
            ImageRef::Elm(_) => "<decoded image>",
        }
    }
}

fn draw_image<S: Surface>(
    surface: &mut S,
    image: &ImageRef<'_, '_, S>,
    handle: &S::Image,
) -> Result<(), S::Error> {
    let bounds = image.bounds();
    scoped(surface, |surface| {
        image.apply_clip(surface);
        surface.draw_image(handle, bounds.x, bounds.y, bounds.width, bounds.height)
    })
}
