//! Per-character gradients.
//!
//! A [`GradientSpec`] holds two or three stops. [`apply_gradient`] pairs
//! every character of a string with the color at its position. Each color
//! depends only on the character index and the string length.

use crate::color::{interpolate, Color};

/// The stops of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientSpec {
    /// Straight blend from the first stop to the second.
    TwoStop(Color, Color),
    /// First half blends start to middle, second half middle to end.
    ThreeStop(Color, Color, Color),
}

impl GradientSpec {
    /// Returns the stops in order.
    pub fn stops(&self) -> Vec<Color> {
        match *self {
            GradientSpec::TwoStop(a, b) => vec![a, b],
            GradientSpec::ThreeStop(a, b, c) => vec![a, b, c],
        }
    }

    /// Returns the color of character `index` in a string of `len` characters.
    ///
    /// For three stops the string splits at `len / 2` (rounded down). When
    /// `len` is odd the second segment is one character longer, and short
    /// strings may never reach the last stop. Both follow from the formula
    /// and are kept as is.
    pub fn color_at(&self, index: usize, len: usize) -> Color {
        match *self {
            GradientSpec::TwoStop(start, end) => interpolate(start, end, position(index, len)),
            GradientSpec::ThreeStop(start, middle, end) => {
                let half = len / 2;
                if index < half {
                    interpolate(start, middle, position(index, half))
                } else {
                    interpolate(middle, end, position(index - half, len - half))
                }
            }
        }
    }
}

/// `index / max(len - 1, 1)`: 0 at the first character, 1 at the last.
fn position(index: usize, len: usize) -> f64 {
    let span = len.saturating_sub(1).max(1);
    index as f64 / span as f64
}

/// Pairs each character of `text` with its gradient color.
///
/// Yields exactly one pair per `char`, in input order. Empty text yields
/// nothing.
///
/// # Example
///
/// ```rust
/// use tintmark::{apply_gradient, Color, GradientSpec};
///
/// let spec = GradientSpec::TwoStop(Color::BLACK, Color::WHITE);
/// let colors: Vec<String> = apply_gradient("abc", spec)
///     .map(|(_, color)| color.to_string())
///     .collect();
/// assert_eq!(colors, ["#000000", "#808080", "#ffffff"]);
/// ```
pub fn apply_gradient(
    text: &str,
    spec: GradientSpec,
) -> impl Iterator<Item = (char, Color)> + '_ {
    let len = text.chars().count();
    text.chars()
        .enumerate()
        .map(move |(index, ch)| (ch, spec.color_at(index, len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn colors(text: &str, spec: GradientSpec) -> Vec<String> {
        apply_gradient(text, spec)
            .map(|(_, color)| color.to_string())
            .collect()
    }

    const RED: &str = "#ff0000";
    const GREEN: &str = "#00ff00";
    const BLUE: &str = "#0000ff";

    fn rgb_stops() -> GradientSpec {
        GradientSpec::ThreeStop(c(RED), c(GREEN), c(BLUE))
    }

    #[test]
    fn test_two_stop_endpoints() {
        let spec = GradientSpec::TwoStop(Color::BLACK, Color::WHITE);
        assert_eq!(colors("AB", spec), ["#000000", "#ffffff"]);
    }

    #[test]
    fn test_two_stop_preserves_characters_and_order() {
        let spec = GradientSpec::TwoStop(c(RED), c(BLUE));
        let chars: String = apply_gradient("héllo✨", spec).map(|(ch, _)| ch).collect();
        assert_eq!(chars, "héllo✨");
    }

    #[test]
    fn test_two_stop_counts_chars_not_bytes() {
        let spec = GradientSpec::TwoStop(Color::BLACK, Color::WHITE);
        // 3 chars, 7 bytes
        assert_eq!(colors("é✨a", spec), ["#000000", "#808080", "#ffffff"]);
    }

    #[test]
    fn test_single_character_gets_first_stop() {
        let spec = GradientSpec::TwoStop(c(RED), c(BLUE));
        assert_eq!(colors("x", spec), [RED]);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert_eq!(apply_gradient("", rgb_stops()).count(), 0);
        let spec = GradientSpec::TwoStop(c(RED), c(BLUE));
        assert_eq!(apply_gradient("", spec).count(), 0);
    }

    #[test]
    fn test_three_stop_even_length() {
        assert_eq!(colors("ABCD", rgb_stops()), [RED, GREEN, GREEN, BLUE]);
    }

    #[test]
    fn test_three_stop_odd_length_is_asymmetric() {
        // half = 2: first segment "AB", second segment "CDE"
        assert_eq!(
            colors("ABCDE", rgb_stops()),
            [RED, GREEN, GREEN, "#008080", BLUE]
        );
    }

    #[test]
    fn test_three_stop_short_strings_stop_at_middle() {
        // n = 1: half = 0, the only character starts the second segment
        assert_eq!(colors("A", rgb_stops()), [GREEN]);
        // n = 2: both segments have one character, each at t = 0
        assert_eq!(colors("AB", rgb_stops()), [RED, GREEN]);
        // n = 3: "A" then "BC"
        assert_eq!(colors("ABC", rgb_stops()), [RED, GREEN, BLUE]);
    }

    #[test]
    fn test_stops() {
        assert_eq!(rgb_stops().stops(), vec![c(RED), c(GREEN), c(BLUE)]);
        assert_eq!(
            GradientSpec::TwoStop(c(RED), c(BLUE)).stops(),
            vec![c(RED), c(BLUE)]
        );
    }
}
