//! The markup façade: one request in, one markup string or error out.

use serde::{Deserialize, Serialize};

use crate::compose::{compose, StyleOptions};
use crate::effect::EffectKind;
use crate::error::ValidationError;
use crate::validate::validate;

/// Everything needed to generate one markup string.
///
/// Colors stay as the caller supplied them; they are checked by
/// [`generate_markup`] against what the effect needs.
///
/// # Example
///
/// ```rust
/// use tintmark::{generate_markup, EffectKind, MarkupRequest};
///
/// let request = MarkupRequest::new("AB", EffectKind::Horizontal, "#000000")
///     .end("#ffffff")
///     .bold(true);
/// assert_eq!(
///     generate_markup(&request).unwrap(),
///     "[b][color=#000000]A[/color][color=#ffffff]B[/color][/b]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupRequest {
    pub text: String,
    pub effect: EffectKind,
    #[serde(rename = "start_color")]
    pub start: String,
    #[serde(default, rename = "middle_color")]
    pub middle: Option<String>,
    #[serde(default, rename = "end_color")]
    pub end: Option<String>,
    #[serde(flatten)]
    pub style: StyleOptions,
}

impl MarkupRequest {
    pub fn new(text: impl Into<String>, effect: EffectKind, start: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            effect,
            start: start.into(),
            middle: None,
            end: None,
            style: StyleOptions::default(),
        }
    }

    pub fn middle(mut self, color: impl Into<String>) -> Self {
        self.middle = Some(color.into());
        self
    }

    pub fn end(mut self, color: impl Into<String>) -> Self {
        self.end = Some(color.into());
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.style = self.style.font(font);
        self
    }

    pub fn size(mut self, size: impl ToString) -> Self {
        self.style = self.style.size(size);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style = self.style.bold(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.style = self.style.italic(italic);
        self
    }

    pub fn with_style(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }
}

/// Validates the request and composes its markup.
///
/// Nothing is composed unless validation passes. The output depends only
/// on the request, so equal requests give byte-identical markup.
///
/// Colors are re-encoded in canonical form: `#FF00AA` comes out as
/// `[color=#ff00aa]`, on the solid path too. The text and the font and
/// size values are inserted verbatim.
pub fn generate_markup(request: &MarkupRequest) -> Result<String, ValidationError> {
    let fill = validate(
        request.effect,
        &request.start,
        request.middle.as_deref(),
        request.end.as_deref(),
    )
    .inspect_err(|err| tracing::debug!(effect = %request.effect, %err, "invalid markup request"))?;

    let markup = compose(&request.text, fill, &request.style);
    tracing::trace!(
        effect = %request.effect,
        chars = request.text.chars().count(),
        bytes = markup.len(),
        "composed markup"
    );
    Ok(markup)
}
