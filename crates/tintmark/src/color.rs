//! RGB colors and linear interpolation between them.
//!
//! Colors travel as `#RRGGBB` strings at the edges and as [`Color`] values
//! inside the pipeline. Parsing is the only fallible step; once a [`Color`]
//! exists, interpolation and encoding are total.

use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color.
///
/// Displays as `#rrggbb` (lowercase, zero-padded). Parses from `#RRGGBB`
/// with hex digits in either case.
///
/// # Example
///
/// ```rust
/// use tintmark::Color;
///
/// let teal: Color = "#008080".parse().unwrap();
/// assert_eq!(teal.to_string(), "#008080");
/// assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as an `(r, g, b)` triplet.
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Nearest entry in the xterm 256-color palette.
    ///
    /// Grays use the 24-step ramp (232..=255), with the darkest and lightest
    /// folded into the cube corners 16 and 231. Everything else maps into
    /// the 6x6x6 cube starting at 16.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tintmark::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).ansi256(), 196);
    /// assert_eq!(Color::rgb(0, 128, 255).ansi256(), 33);
    /// ```
    pub fn ansi256(self) -> u8 {
        let Color { r, g, b } = self;
        if r == g && g == b {
            return match r {
                0..=7 => 16,
                249..=255 => 231,
                level => 232 + ((u16::from(level) - 8) * 24 / 247) as u8,
            };
        }
        let step = |channel: u8| (u16::from(channel) * 5 / 255) as u8;
        16 + 36 * step(r) + 6 * step(g) + step(b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a #RRGGBB color")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        // from_str_radix tolerates a leading '+', so check digits up front
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| err());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Linearly interpolates between `from` and `to` at position `t`.
///
/// `t = 0` yields `from` and `t = 1` yields `to`. Each channel is computed
/// as `from + (to - from) * t` and rounded half away from zero.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate along the same
/// line. A channel that lands outside `0..=255` saturates at the nearest
/// bound, so the result is always a valid color.
///
/// # Example
///
/// ```rust
/// use tintmark::{interpolate, Color};
///
/// let mid = interpolate(Color::BLACK, Color::WHITE, 0.5);
/// assert_eq!(mid.to_string(), "#808080");
///
/// // extrapolation saturates instead of wrapping
/// assert_eq!(interpolate(Color::BLACK, Color::WHITE, 3.0), Color::WHITE);
/// ```
pub fn interpolate(from: Color, to: Color, t: f64) -> Color {
    Color::rgb(
        lerp_channel(from.r, to.r, t),
        lerp_channel(from.g, to.g, t),
        lerp_channel(from.b, to.b, t),
    )
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let value = (from + (f64::from(to) - from) * t).round();
    // NaN survives clamp and casts to 0
    value.clamp(0.0, 255.0) as u8
}
