use std::process::ExitCode;

use clap::Parser;
use console::style;

mod cli;
mod dispatch;
mod logging;

use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match dispatch::dispatch(&cli) {
        Ok(out) => {
            println!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("{} {err}", style("error:").red().bold().for_stderr());
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
