//! CSS font shorthand parsing and glyph advances for the recording surface

use crate::error::{PaintError, Result};

/// Font used when nothing has been set, matching the HTML canvas default
pub const DEFAULT_FONT: &str = "10px sans-serif";

/// A parsed font shorthand (`[style] [weight] <size>px[/<line-height>] <family>`)
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Pixel size
    pub size: f32,
    /// Family list as written, e.g. `"Helvetica, sans-serif"`
    pub family: String,
    /// Style and weight keywords preceding the size
    pub modifiers: Vec<String>,
}

impl Font {
    /// Parse a CSS font shorthand. The size must be given in `px`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || PaintError::InvalidFont(input.to_string());
        let mut tokens = input.split_whitespace();
        let mut modifiers = Vec::new();

        let size = loop {
            let token = tokens.next().ok_or_else(invalid)?;
            // `14px/1.5` carries a line height we ignore
            let size_part = token.split('/').next().unwrap_or(token);
            match size_part.strip_suffix("px") {
                Some(number) => {
                    let size: f32 = number.parse().map_err(|_| invalid())?;
                    if !size.is_finite() || size <= 0.0 {
                        return Err(invalid());
                    }
                    break size;
                }
                None => modifiers.push(token.to_string()),
            }
        };

        let family = tokens.collect::<Vec<_>>().join(" ");
        if family.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            size,
            family,
            modifiers,
        })
    }

    /// Horizontal advance of a single glyph in pixels
    pub fn advance(&self, ch: char) -> f32 {
        self.size * em_width(ch)
    }

    /// Width of a run of text; advances are summed, so widths are additive
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 10.0,
            family: "sans-serif".to_string(),
            modifiers: Vec::new(),
        }
    }
}

/// Approximate advance as a fraction of the em square
fn em_width(ch: char) -> f32 {
    match ch {
        'i' | 'l' | 'j' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | ' ' => 0.25,
        'm' | 'w' | 'M' | 'W' | '@' => 1.0,
        '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{9FFF}'
        | '\u{AC00}'..='\u{D7A3}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{FFE0}'..='\u{FFE6}' => 1.0,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let font = Font::parse("italic bold 14px/1.5 Helvetica, sans-serif").unwrap();
        assert_eq!(font.size, 14.0);
        assert_eq!(font.family, "Helvetica, sans-serif");
        assert_eq!(font.modifiers, vec!["italic", "bold"]);
    }

    #[test]
    fn test_default_matches_canvas() {
        assert_eq!(Font::parse(DEFAULT_FONT).unwrap(), Font::default());
    }

    #[test]
    fn test_parse_rejects_missing_size() {
        assert!(matches!(
            Font::parse("bold sans-serif"),
            Err(PaintError::InvalidFont(_))
        ));
        assert!(Font::parse("12px").is_err());
        assert!(Font::parse("-3px serif").is_err());
        assert!(Font::parse("").is_err());
    }

    #[test]
    fn test_measure_is_additive() {
        let font = Font::parse("16px serif").unwrap();
        assert_eq!(font.measure("abc"), 24.0);
        assert_eq!(font.measure("il"), 8.0);
        assert_eq!(font.measure("W中"), 32.0);
        assert_eq!(
            font.measure("hello world"),
            font.measure("hello") + font.measure(" world")
        );
    }
}
