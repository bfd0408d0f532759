//! Log setup for the binary.
//!
//! Logs go to stderr so they never mix with generated markup on stdout.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TINTMARK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// `--verbose` wins over the environment; otherwise `TINTMARK_LOG`, then `warn`.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init(verbose: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_verbose_filter_is_debug() {
        assert_eq!(filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
