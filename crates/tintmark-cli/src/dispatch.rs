//! Runs a parsed command against the tintmark library.
//!
//! Every command produces a string for stdout or a [`DispatchError`]. The
//! error decides the exit status: user mistakes exit with 2, anything else
//! with 1.

use serde::Serialize;
use tintmark::{
    compute_ratio, generate_markup, render, DivisionByZeroError, EffectKind, MarkupRequest,
    StyleOptions, TagTransform, ValidationError,
};

use crate::cli::{CalculateArgs, Cli, Command, GradientArgs, OutputMode};

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZeroError),
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DispatchError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DispatchError::Validation(_) | DispatchError::DivisionByZero(_) => 2,
            DispatchError::Serialize(_) => 1,
        }
    }
}

#[derive(Serialize)]
struct MarkupOutput<'a> {
    markup: &'a str,
}

#[derive(Serialize)]
struct RatioOutput {
    result: f64,
}

pub fn dispatch(cli: &Cli) -> Result<String, DispatchError> {
    match &cli.command {
        Command::Gradient(args) => gradient(args, cli.output),
        Command::Calculate(args) => calculate(args, cli.output),
    }
}

fn gradient(args: &GradientArgs, output: OutputMode) -> Result<String, DispatchError> {
    let effect: EffectKind = args.effect.parse()?;
    let request = MarkupRequest {
        text: args.text.clone(),
        effect,
        start: args.start.clone(),
        middle: args.middle.clone(),
        end: args.end.clone(),
        style: StyleOptions {
            font: args.font.clone(),
            size: args.size.clone(),
            bold: args.bold,
            italic: args.italic,
        },
    };
    let markup = generate_markup(&request)?;
    tracing::debug!(%effect, bytes = markup.len(), "generated markup");

    Ok(match output {
        OutputMode::Markup => markup,
        OutputMode::Term => render(&markup, TagTransform::Apply),
        OutputMode::Text => render(&markup, TagTransform::Remove),
        OutputMode::Json => serde_json::to_string(&MarkupOutput { markup: &markup })?,
    })
}

fn calculate(args: &CalculateArgs, output: OutputMode) -> Result<String, DispatchError> {
    let result = compute_ratio(args.bpm, args.desired_snap, args.base_snap)?;
    Ok(match output {
        OutputMode::Json => serde_json::to_string(&RatioOutput { result })?,
        _ => format!("Result: {result:.2} BPM"),
    })
}
