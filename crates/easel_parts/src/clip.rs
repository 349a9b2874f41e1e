//! Reusable clip callbacks

use std::f32::consts::PI;

use easel_paint::Surface;

use crate::part::ImageBounds;

/// Clip to the circle inscribed in the part's box.
///
/// The radius is half the box width, centred on the box.
pub fn circle_clip<S, P>(surface: &mut S, part: &P)
where
    S: Surface + ?Sized,
    P: ImageBounds + ?Sized,
{
    let bounds = part.bounds();
    let center = bounds.center();
    surface.move_to(bounds.x + bounds.width, center.y);
    surface.arc(center.x, center.y, bounds.width / 2.0, 0.0, PI * 2.0, true);
    surface.clip();
}
