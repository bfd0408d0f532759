//! Request validation.
//!
//! Decides, per effect, which colors must be present and turns the raw
//! color strings into a [`Fill`] the composer can use directly.

use crate::color::Color;
use crate::compose::Fill;
use crate::effect::EffectKind;
use crate::error::ValidationError;
use crate::gradient::GradientSpec;

/// Checks the colors an effect needs and parses them.
///
/// | effect                  | needs beyond `start` |
/// |-------------------------|----------------------|
/// | `Solid`                 | nothing              |
/// | `Horizontal`            | `end`                |
/// | `Middle`, `ThreeColor`  | `middle` and `end`   |
///
/// Missing colors are reported before malformed ones. Colors the effect
/// does not use are ignored, even when malformed.
///
/// # Example
///
/// ```rust
/// use tintmark::{validate, EffectKind, ValidationError};
///
/// let err = validate(EffectKind::Horizontal, "#000000", None, None).unwrap_err();
/// assert_eq!(err, ValidationError::MissingEndColor);
/// ```
pub fn validate(
    effect: EffectKind,
    start: &str,
    middle: Option<&str>,
    end: Option<&str>,
) -> Result<Fill, ValidationError> {
    match effect {
        EffectKind::Solid => Ok(Fill::Solid(parse("start_color", start)?)),
        EffectKind::Horizontal => {
            let end = end.ok_or(ValidationError::MissingEndColor)?;
            Ok(Fill::Gradient(GradientSpec::TwoStop(
                parse("start_color", start)?,
                parse("end_color", end)?,
            )))
        }
        EffectKind::Middle | EffectKind::ThreeColor => {
            let (Some(middle), Some(end)) = (middle, end) else {
                return Err(ValidationError::MissingMiddleAndEnd {
                    effect: effect.to_string(),
                });
            };
            Ok(Fill::Gradient(GradientSpec::ThreeStop(
                parse("start_color", start)?,
                parse("middle_color", middle)?,
                parse("end_color", end)?,
            )))
        }
    }
}

/// Like [`validate`], for an effect that is still a raw keyword.
pub fn validate_keyword(
    effect: &str,
    start: &str,
    middle: Option<&str>,
    end: Option<&str>,
) -> Result<Fill, ValidationError> {
    validate(effect.parse()?, start, middle, end)
}

fn parse(field: &'static str, value: &str) -> Result<Color, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidColor {
        field,
        value: value.to_string(),
    })
}
