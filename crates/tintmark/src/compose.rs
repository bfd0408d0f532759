//! Markup composition.
//!
//! Builds the color-tagged body of a request and wraps it in the optional
//! style tags. Tags always nest in the same order:
//!
//! ```text
//! [font=F][size=S][b][i] body [/i][/b][/size][/font]
//! ```
//!
//! Layers that are not enabled are left out entirely.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::gradient::{apply_gradient, GradientSpec};

/// What colors the text: one color, or a per-character gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Color),
    Gradient(GradientSpec),
}

/// Optional style layers wrapped around the colored text.
///
/// All fields are independent and default to off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub font: Option<String>,
    pub size: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn size(mut self, size: impl ToString) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Returns true if no layer is enabled.
    pub fn is_plain(&self) -> bool {
        self.font.is_none() && self.size.is_none() && !self.bold && !self.italic
    }
}

/// Composes the full markup string for `text`.
///
/// A solid fill wraps the whole text in one color tag. A gradient wraps
/// every character in its own color tag; adjacent characters of the same
/// color are not merged.
///
/// Colors are written as lowercase `#rrggbb` whatever case they were parsed
/// from. Text, font and size are not escaped, so brackets in them can read
/// as tags to a downstream parser. In a gradient body every character sits
/// between two tags and cannot form one.
///
/// # Example
///
/// ```rust
/// use tintmark::{compose, Color, Fill, StyleOptions};
///
/// let style = StyleOptions::new().bold(true);
/// let markup = compose("hi", Fill::Solid(Color::WHITE), &style);
/// assert_eq!(markup, "[b][color=#ffffff]hi[/color][/b]");
/// ```
pub fn compose(text: &str, fill: Fill, style: &StyleOptions) -> String {
    let body = match fill {
        Fill::Solid(color) => color_tag(color, text),
        Fill::Gradient(spec) => gradient_body(text, spec),
    };
    wrap_style(body, style)
}

fn color_tag(color: Color, inner: &str) -> String {
    format!("[color={color}]{inner}[/color]")
}

fn gradient_body(text: &str, spec: GradientSpec) -> String {
    // "[color=#rrggbb]" + char + "[/color]"
    let mut body = String::with_capacity(text.len() + text.chars().count() * 23);
    for (ch, color) in apply_gradient(text, spec) {
        // Writing to a String cannot fail
        let _ = write!(body, "[color={color}]{ch}[/color]");
    }
    body
}

/// Wraps `body` in the enabled style layers, innermost first.
fn wrap_style(body: String, style: &StyleOptions) -> String {
    let mut out = body;
    if style.italic {
        out = format!("[i]{out}[/i]");
    }
    if style.bold {
        out = format!("[b]{out}[/b]");
    }
    if let Some(size) = &style.size {
        out = format!("[size={size}]{out}[/size]");
    }
    if let Some(font) = &style.font {
        out = format!("[font={font}]{out}[/font]");
    }
    out
}
