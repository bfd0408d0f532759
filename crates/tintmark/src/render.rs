//! Rendering of tintmark markup.
//!
//! The composer produces bracketed tags meant for a downstream consumer.
//! This module reads that markup back so it can be previewed in a terminal
//! or reduced to plain text.
//!
//! Recognised tags: `[color=#rrggbb]`, `[font=NAME]`, `[size=N]`, `[b]`,
//! `[i]` and their closing forms. Any other bracketed text is literal.
//!
//! # Transforms
//!
//! - [`TagTransform::Keep`]: tags stay in the output (debugging)
//! - [`TagTransform::Remove`]: tags are stripped, leaving the text
//! - [`TagTransform::Apply`]: tags become ANSI escapes. Colors map to the
//!   256-color palette; bold and italic map to their SGR attributes. Font
//!   and size have no terminal equivalent and are dropped.
//!
//! # Example
//!
//! ```rust
//! use tintmark::{render, TagTransform};
//!
//! let markup = "[b][color=#ff0000]hi[/color][/b]";
//! assert_eq!(render(markup, TagTransform::Remove), "hi");
//! assert_eq!(render(markup, TagTransform::Keep), markup);
//! ```

use std::fmt;

use console::Style;

use crate::color::Color;

/// What to do with tags when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagTransform {
    /// Leave tags untouched.
    Keep,
    /// Strip tags.
    #[default]
    Remove,
    /// Replace tags with ANSI escapes.
    Apply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagName {
    Color,
    Font,
    Size,
    Bold,
    Italic,
}

impl TagName {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "color" => Some(TagName::Color),
            "font" => Some(TagName::Font),
            "size" => Some(TagName::Size),
            "b" => Some(TagName::Bold),
            "i" => Some(TagName::Italic),
            _ => None,
        }
    }

    fn takes_value(self) -> bool {
        matches!(self, TagName::Color | TagName::Font | TagName::Size)
    }
}

/// A problem found while rendering. Rendering still produces output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A closing tag with no matching open tag
    #[error("unexpected close tag '{tag}' at byte {offset}")]
    UnexpectedClose { tag: String, offset: usize },
    /// An open tag that is never closed
    #[error("unbalanced tag '{tag}' at byte {offset} is never closed")]
    Unclosed { tag: String, offset: usize },
    /// A color tag whose value is not `#RRGGBB`
    #[error("malformed color '{value}' at byte {offset}")]
    BadColor { value: String, offset: usize },
}

/// All problems found while rendering one markup string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderErrors(Vec<RenderError>);

impl RenderErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderError> {
        self.0.iter()
    }
}

impl fmt::Display for RenderErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RenderErrors {}

impl IntoIterator for RenderErrors {
    type Item = RenderError;
    type IntoIter = std::vec::IntoIter<RenderError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open {
        name: TagName,
        value: &'a str,
        raw: &'a str,
        offset: usize,
    },
    Close {
        name: TagName,
        raw: &'a str,
        offset: usize,
    },
}

fn parse_tag<'a>(inner: &'a str, raw: &'a str, offset: usize) -> Option<Token<'a>> {
    if let Some(name) = inner.strip_prefix('/') {
        let name = TagName::parse(name)?;
        return Some(Token::Close { name, raw, offset });
    }
    let (name, value) = match inner.split_once('=') {
        Some((name, value)) => (TagName::parse(name)?, Some(value)),
        None => (TagName::parse(inner)?, None),
    };
    // value tags need a non-empty value, flag tags must have no `=` at all
    let value = match (name.takes_value(), value) {
        (true, Some(value)) if !value.is_empty() => value,
        (false, None) => "",
        _ => return None,
    };
    Some(Token::Open {
        name,
        value,
        raw,
        offset,
    })
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(found) = input[cursor..].find('[') {
        let open = cursor + found;
        let Some(len) = input[open..].find(']') else {
            break;
        };
        let close = open + len;
        match parse_tag(&input[open + 1..close], &input[open..=close], open) {
            Some(token) => {
                if text_start < open {
                    tokens.push(Token::Text(&input[text_start..open]));
                }
                tokens.push(token);
                cursor = close + 1;
                text_start = cursor;
            }
            None => cursor = open + 1,
        }
    }
    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

struct Frame<'a> {
    name: TagName,
    color: Option<Color>,
    raw: &'a str,
    offset: usize,
}

struct Renderer<'a> {
    transform: TagTransform,
    stack: Vec<Frame<'a>>,
    out: String,
    errors: Vec<RenderError>,
}

impl<'a> Renderer<'a> {
    fn new(transform: TagTransform, capacity: usize) -> Self {
        Self {
            transform,
            stack: Vec::new(),
            out: String::with_capacity(capacity),
            errors: Vec::new(),
        }
    }

    fn push(&mut self, token: Token<'a>) {
        match token {
            Token::Text(text) => self.text(text),
            Token::Open {
                name,
                value,
                raw,
                offset,
            } => {
                let color = if name == TagName::Color {
                    match value.parse::<Color>() {
                        Ok(color) => Some(color),
                        Err(_) => {
                            self.errors.push(RenderError::BadColor {
                                value: value.to_string(),
                                offset,
                            });
                            None
                        }
                    }
                } else {
                    None
                };
                self.stack.push(Frame {
                    name,
                    color,
                    raw,
                    offset,
                });
                self.keep(raw);
            }
            Token::Close { name, raw, offset } => {
                match self.stack.iter().rposition(|frame| frame.name == name) {
                    Some(index) => {
                        for frame in self.stack.drain(index + 1..) {
                            self.errors.push(RenderError::Unclosed {
                                tag: frame.raw.to_string(),
                                offset: frame.offset,
                            });
                        }
                        self.stack.pop();
                        self.keep(raw);
                    }
                    None => {
                        self.errors.push(RenderError::UnexpectedClose {
                            tag: raw.to_string(),
                            offset,
                        });
                        // an unmatched close is not a tag, so it stays as text
                        self.text(raw);
                    }
                }
            }
        }
    }

    fn keep(&mut self, raw: &str) {
        if self.transform == TagTransform::Keep {
            self.out.push_str(raw);
        }
    }

    fn text(&mut self, text: &str) {
        match self.current_style() {
            Some(style) if self.transform == TagTransform::Apply => {
                self.out.push_str(&style.apply_to(text).to_string());
            }
            _ => self.out.push_str(text),
        }
    }

    /// Style for the innermost color plus any open bold/italic.
    fn current_style(&self) -> Option<Style> {
        let color = self.stack.iter().rev().find_map(|frame| frame.color);
        let bold = self.stack.iter().any(|frame| frame.name == TagName::Bold);
        let italic = self.stack.iter().any(|frame| frame.name == TagName::Italic);
        if color.is_none() && !bold && !italic {
            return None;
        }

        let mut style = Style::new().force_styling(true);
        if let Some(color) = color {
            style = style.color256(color.ansi256());
        }
        if bold {
            style = style.bold();
        }
        if italic {
            style = style.italic();
        }
        Some(style)
    }

    fn finish(mut self) -> (String, RenderErrors) {
        for frame in self.stack.drain(..) {
            self.errors.push(RenderError::Unclosed {
                tag: frame.raw.to_string(),
                offset: frame.offset,
            });
        }
        (self.out, RenderErrors(self.errors))
    }
}

/// Renders markup, discarding diagnostics.
pub fn render(markup: &str, transform: TagTransform) -> String {
    render_with_diagnostics(markup, transform).0
}

/// Renders markup and reports unbalanced tags and malformed colors.
///
/// The output is always produced; problems are collected alongside it.
pub fn render_with_diagnostics(markup: &str, transform: TagTransform) -> (String, RenderErrors) {
    let mut renderer = Renderer::new(transform, markup.len());
    for token in tokenize(markup) {
        renderer.push(token);
    }
    let (out, errors) = renderer.finish();
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), %errors, "markup rendered with problems");
    }
    (out, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_text() {
        assert_eq!(tokenize("hello"), vec![Token::Text("hello")]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_tags_and_text() {
        let tokens = tokenize("a[b]c[/b]");
        assert_eq!(
            tokens,
            vec![
                Token::Text("a"),
                Token::Open {
                    name: TagName::Bold,
                    value: "",
                    raw: "[b]",
                    offset: 1
                },
                Token::Text("c"),
                Token::Close {
                    name: TagName::Bold,
                    raw: "[/b]",
                    offset: 5
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_unknown_brackets_are_text() {
        assert_eq!(tokenize("[x] [b=1] [color]"), vec![Token::Text("[x] [b=1] [color]")]);
        assert_eq!(tokenize("a [ b"), vec![Token::Text("a [ b")]);
    }

    #[test]
    fn test_tokenize_flag_tags_with_equals_are_text() {
        assert_eq!(tokenize("[b=]x[i=]"), vec![Token::Text("[b=]x[i=]")]);
        assert_eq!(tokenize("[font=]y"), vec![Token::Text("[font=]y")]);
        let (out, errors) = render_with_diagnostics("[b=]x[/b]", TagTransform::Remove);
        assert_eq!(out, "[b=]x[/b]");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_tokenize_bracket_character_inside_tags() {
        let tokens = tokenize("[color=#ff0000][[/color]");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::Text("["));
    }

    #[test]
    fn test_remove_strips_tags() {
        let markup = "[font=Arial][b][color=#ff0000]A[/color][color=#00ff00]B[/color][/b][/font]";
        assert_eq!(render(markup, TagTransform::Remove), "AB");
    }

    #[test]
    fn test_keep_is_identity() {
        let markup = "[size=3][i][color=#abcdef]x[/color][/i][/size]";
        assert_eq!(render(markup, TagTransform::Keep), markup);
    }

    #[test]
    fn test_apply_emits_ansi() {
        let (out, errors) =
            render_with_diagnostics("[b][color=#ff0000]hi[/color][/b]", TagTransform::Apply);
        assert!(errors.is_empty());
        assert!(out.contains("\x1b[38;5;196m"), "{out:?}");
        assert!(out.contains("\x1b[1m"), "{out:?}");
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_apply_unstyled_text_is_untouched() {
        assert_eq!(render("plain", TagTransform::Apply), "plain");
        assert_eq!(render("[font=Mono]plain[/font]", TagTransform::Apply), "plain");
    }

    #[test]
    fn test_apply_innermost_color_wins() {
        let out = render(
            "[color=#ff0000][color=#00ff00]g[/color][/color]",
            TagTransform::Apply,
        );
        assert!(out.contains("\x1b[38;5;46m"), "{out:?}");
        assert!(!out.contains("\x1b[38;5;196m"), "{out:?}");
    }

    #[test]
    fn test_unclosed_tag_is_reported() {
        let (out, errors) = render_with_diagnostics("[b]unfinished", TagTransform::Remove);
        assert_eq!(out, "unfinished");
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![&RenderError::Unclosed {
                tag: "[b]".to_string(),
                offset: 0
            }]
        );
        assert!(errors.to_string().contains("unbalanced"));
    }

    #[test]
    fn test_unexpected_close_is_reported_and_kept_as_text() {
        let (out, errors) = render_with_diagnostics("text[/b]", TagTransform::Remove);
        assert_eq!(out, "text[/b]");
        assert_eq!(errors.len(), 1);
        assert!(errors.to_string().contains("unexpected close tag"));
    }

    #[test]
    fn test_misnested_close_reports_skipped_frames() {
        let (out, errors) = render_with_diagnostics("[b][i]x[/b]", TagTransform::Remove);
        assert_eq!(out, "x");
        assert_eq!(
            errors.into_iter().collect::<Vec<_>>(),
            vec![RenderError::Unclosed {
                tag: "[i]".to_string(),
                offset: 3
            }]
        );
    }

    #[test]
    fn test_bad_color_is_reported() {
        let (out, errors) =
            render_with_diagnostics("[color=red]x[/color]", TagTransform::Apply);
        assert_eq!(out, "x");
        assert_eq!(
            errors.iter().next(),
            Some(&RenderError::BadColor {
                value: "red".to_string(),
                offset: 0
            })
        );
    }
}
