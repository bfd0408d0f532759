//! Errors surfaced to callers of the façade functions.
//!
//! Both error types are recoverable and meant to be shown to the user as is.

/// Error returned when a markup request is missing or has bad parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A two-stop effect was requested without an end color
    #[error("end_color required for the horizontal effect")]
    MissingEndColor,
    /// A three-stop effect was requested without middle and end colors
    #[error("middle_color and end_color required for the {effect} effect")]
    MissingMiddleAndEnd { effect: String },
    /// The effect keyword is not one of the known effects
    #[error("unknown effect type '{0}'")]
    UnknownEffect(String),
    /// A required color is not a `#RRGGBB` string
    #[error("{field} '{value}' is not a #RRGGBB color")]
    InvalidColor { field: &'static str, value: String },
}

/// Error returned by [`compute_ratio`](crate::compute_ratio) for a zero base snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("base_snap cannot be zero")]
pub struct DivisionByZeroError;
