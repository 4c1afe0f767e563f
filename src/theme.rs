//! Colors and the fixed visual style of the split container
//!
//! Divider styling is not configurable; only pane contents pick their colors.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Darken each channel by `amount` (0.0 - 1.0), keeping alpha
    pub fn darken(&self, amount: f32) -> Self {
        let scale = (1.0 - amount).clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * scale) as u8,
            g: (self.g as f32 * scale) as u8,
            b: (self.b as f32 * scale) as u8,
            a: self.a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Border width drawn on both long sides of a divider
pub const DIVIDER_BORDER_WIDTH: f32 = 1.0;

/// Fixed colors of the container chrome
#[derive(Debug, Clone, Copy)]
pub struct SplitStyle {
    /// Divider fill (`#f7f7f7`)
    pub divider: Color,
    /// Divider border lines (`rgb(236, 236, 236)`)
    pub divider_border: Color,
    /// Container background behind panes that don't paint themselves
    pub background: Color,
}

impl SplitStyle {
    pub const fn new() -> Self {
        Self {
            divider: Color::rgb(0xF7, 0xF7, 0xF7),
            divider_border: Color::rgb(236, 236, 236),
            background: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

impl Default for SplitStyle {
    fn default() -> Self {
        Self::new()
    }
}
