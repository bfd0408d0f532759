//! Command-line arguments.
//!
//! Options that make sense to set once per shell (`--output`) can also come
//! from the environment.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Environment variable holding the default output mode.
pub const OUTPUT_ENV: &str = "TINTMARK_OUTPUT";

#[derive(Debug, Parser)]
#[command(
    name = "tintmark",
    version,
    about = "Generate per-character gradient markup"
)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// How to print results
    #[arg(
        long,
        global = true,
        value_enum,
        env = OUTPUT_ENV,
        default_value_t = OutputMode::Markup
    )]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Color text with a solid color or a gradient
    Gradient(GradientArgs),
    /// Scale a BPM from one snap division to another
    Calculate(CalculateArgs),
}

#[derive(Debug, Args)]
pub struct GradientArgs {
    /// Text to color
    pub text: String,

    /// solid, horizontal, middle or three_color
    #[arg(short, long, default_value = "horizontal")]
    pub effect: String,

    /// First color, as #RRGGBB
    #[arg(short, long = "start", visible_alias = "start-color")]
    pub start: String,

    /// Middle color for three-stop effects
    #[arg(short, long = "middle", visible_alias = "middle-color")]
    pub middle: Option<String>,

    /// Last color for gradient effects
    #[arg(short = 'n', long = "end", visible_alias = "end-color")]
    pub end: Option<String>,

    /// Wrap the result in a font tag
    #[arg(long)]
    pub font: Option<String>,

    /// Wrap the result in a size tag
    #[arg(long)]
    pub size: Option<String>,

    /// Wrap the result in a bold tag
    #[arg(short, long)]
    pub bold: bool,

    /// Wrap the result in an italic tag
    #[arg(short, long)]
    pub italic: bool,
}

#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// Base BPM
    pub bpm: f64,
    /// Desired snap value (e.g. 4, 8, 16)
    #[arg(allow_negative_numbers = true)]
    pub desired_snap: i64,
    /// Base snap value (e.g. 4, 8, 16)
    #[arg(allow_negative_numbers = true)]
    pub base_snap: i64,
}

/// Output mode for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Raw markup
    Markup,
    /// Markup rendered with ANSI colors
    Term,
    /// Tags stripped
    Text,
    /// JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_gradient() {
        let cli = Cli::try_parse_from([
            "tintmark", "gradient", "Hello", "--effect", "middle", "--start", "#ff0000",
            "--middle", "#00ff00", "--end", "#0000ff", "--font", "Arial", "-b",
        ])
        .unwrap();
        let Command::Gradient(args) = cli.command else {
            panic!("expected gradient command");
        };
        assert_eq!(args.text, "Hello");
        assert_eq!(args.effect, "middle");
        assert_eq!(args.middle.as_deref(), Some("#00ff00"));
        assert_eq!(args.end.as_deref(), Some("#0000ff"));
        assert_eq!(args.font.as_deref(), Some("Arial"));
        assert!(args.bold);
        assert!(!args.italic);
        assert_eq!(args.size, None);
    }

    #[test]
    fn test_parse_color_aliases() {
        let cli = Cli::try_parse_from([
            "tintmark", "gradient", "x", "--start-color", "#000000", "--end-color", "#ffffff",
        ])
        .unwrap();
        let Command::Gradient(args) = cli.command else {
            panic!("expected gradient command");
        };
        assert_eq!(args.start, "#000000");
        assert_eq!(args.end.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_gradient_requires_start() {
        assert!(Cli::try_parse_from(["tintmark", "gradient", "x"]).is_err());
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from(["tintmark", "calculate", "120", "8", "4"]).unwrap();
        let Command::Calculate(args) = cli.command else {
            panic!("expected calculate command");
        };
        assert_eq!(args.bpm, 120.0);
        assert_eq!(args.desired_snap, 8);
        assert_eq!(args.base_snap, 4);
    }

    #[test]
    fn test_parse_global_output_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tintmark", "calculate", "120", "8", "4", "--output", "json"])
                .unwrap();
        assert_eq!(cli.output, OutputMode::Json);
    }
}
