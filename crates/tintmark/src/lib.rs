//! # Tintmark - gradient text as BBCode-style markup
//!
//! Tintmark turns a string plus a few colors into markup where every
//! character carries its own color tag, optionally wrapped in font, size,
//! bold and italic tags. The output follows the bracketed convention many
//! chat and game clients understand:
//!
//! ```text
//! [font=NAME][size=N][b][i][color=#rrggbb]c[/color]...[/i][/b][/size][/font]
//! ```
//!
//! ## Pipeline
//!
//! [`generate_markup`] runs three steps on a [`MarkupRequest`]:
//!
//! 1. [`validate`] checks that the colors the [`EffectKind`] needs are
//!    present and well formed, producing a [`Fill`]
//! 2. [`apply_gradient`] assigns each character its color via
//!    [`interpolate`]
//! 3. [`compose`] emits the color tags and wraps them in the style layers
//!    of [`StyleOptions`]
//!
//! Every step is a pure function. Equal requests yield byte-identical
//! markup.
//!
//! ## Quick start
//!
//! ```rust
//! use tintmark::{generate_markup, EffectKind, MarkupRequest};
//!
//! let request = MarkupRequest::new("Hey", EffectKind::ThreeColor, "#ff0000")
//!     .middle("#00ff00")
//!     .end("#0000ff")
//!     .italic(true);
//!
//! let markup = generate_markup(&request).unwrap();
//! assert!(markup.starts_with("[i][color=#ff0000]H[/color]"));
//! ```
//!
//! Missing colors come back as a [`ValidationError`]:
//!
//! ```rust
//! use tintmark::{generate_markup, EffectKind, MarkupRequest};
//!
//! let request = MarkupRequest::new("Hey", EffectKind::Horizontal, "#ff0000");
//! let err = generate_markup(&request).unwrap_err();
//! assert!(err.to_string().contains("end_color"));
//! ```
//!
//! ## Previewing
//!
//! [`render`] reads markup back and either strips it or turns it into ANSI
//! escapes for a terminal, see [`TagTransform`].
//!
//! ## BPM ratio
//!
//! [`compute_ratio`] is an unrelated helper kept in the same crate:
//! `bpm * desired_snap / base_snap`, failing on a zero base.

mod color;
mod compose;
mod effect;
mod error;
mod gradient;
mod ratio;
mod render;
mod request;
mod validate;

pub use color::{interpolate, Color, ParseColorError};
pub use compose::{compose, Fill, StyleOptions};
pub use effect::EffectKind;
pub use error::{DivisionByZeroError, ValidationError};
pub use gradient::{apply_gradient, GradientSpec};
pub use ratio::compute_ratio;
pub use render::{render, render_with_diagnostics, RenderError, RenderErrors, TagTransform};
pub use request::{generate_markup, MarkupRequest};
pub use validate::{validate, validate_keyword};
