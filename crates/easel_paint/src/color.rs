//! Color types and CSS color parsing

use crate::error::{PaintError, Result};

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse a CSS color string.
    ///
    /// Supported formats:
    /// - `#rgb` and `#rgba` (each nibble doubled)
    /// - `#rrggbb` and `#rrggbbaa`
    /// - a small set of named colors plus `transparent`
    pub fn parse_css(input: &str) -> Result<Self> {
        let s = input.trim();
        let invalid = || PaintError::InvalidColor(input.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                3 => Ok(Self::from_hex(expand_nibbles(value, 3))),
                4 => Ok(Self::from_hex(expand_nibbles(value, 4)).with_short_alpha(value)),
                6 => Ok(Self::from_hex(value)),
                8 => {
                    let [r, g, b, a] = value.to_be_bytes();
                    Ok(Self::from_rgba8(r, g, b, a))
                }
                _ => Err(invalid()),
            };
        }

        let rgb = match s.to_ascii_lowercase().as_str() {
            "black" => 0x000000,
            "white" => 0xFFFFFF,
            "red" => 0xFF0000,
            "green" => 0x008000,
            "blue" => 0x0000FF,
            "yellow" => 0xFFFF00,
            "cyan" | "aqua" => 0x00FFFF,
            "magenta" | "fuchsia" => 0xFF00FF,
            "orange" => 0xFFA500,
            "gray" | "grey" => 0x808080,
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => return Err(invalid()),
        };
        Ok(Self::from_hex(rgb))
    }

    fn with_short_alpha(self, rgba: u32) -> Self {
        let nibble = (rgba & 0xF) as u8;
        Self {
            a: (nibble << 4 | nibble) as f32 / 255.0,
            ..self
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }
}

/// Expand `#rgb` / `#rgba` nibbles into a 0xRRGGBB value (alpha nibble dropped)
fn expand_nibbles(value: u32, digits: u32) -> u32 {
    let value = if digits == 4 { value >> 4 } else { value };
    let r = (value >> 8) & 0xF;
    let g = (value >> 4) & 0xF;
    let b = value & 0xF;
    (r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)
}
