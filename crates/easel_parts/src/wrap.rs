//! Width-constrained line wrapping
//!
//! Splits text into lines by binary-searching the longest prefix that fits,
//! using only the surface's `measure_text`. Lines break at any character, not
//! at word boundaries, and joining the lines gives back the input.

use easel_paint::Surface;

/// Split `text` into lines no wider than `max_width`.
///
/// A line can only exceed `max_width` when it is a single glyph that is
/// wider on its own. Empty input yields no lines.
pub fn wrap<S: Surface + ?Sized>(surface: &S, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if surface.measure_text(rest) <= max_width {
            lines.push(rest.to_string());
            break;
        }

        let (line, tail) = rest.split_at(split_index(surface, rest, max_width));
        tracing::trace!(line, "wrapped line");
        lines.push(line.to_string());
        rest = tail;
    }

    lines
}

/// Byte index where the first line of `text` ends.
///
/// `budget` shrinks by each accepted piece, so only the unmeasured span
/// `[left, anchor)` is measured per step. This assumes widths are additive;
/// kerning across the split point is not accounted for.
fn split_index<S: Surface + ?Sized>(surface: &S, text: &str, max_width: f32) -> usize {
    // Byte offset of every char boundary, including the end
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    let mut left = 0;
    let mut right = char_count - 1;
    let mut anchor = (left + right) / 2;
    let mut budget = max_width;

    while right - left > 1 {
        let width = surface.measure_text(&text[boundaries[left]..boundaries[anchor]]);
        if width > budget {
            right = anchor;
        } else {
            left = anchor;
            budget -= width;
        }
        anchor = (left + right) / 2;
    }

    // A lone glyph wider than the line still has to go somewhere
    boundaries[anchor.max(1)]
}
