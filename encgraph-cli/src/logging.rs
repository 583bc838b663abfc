// ============================================================================
// encgraph-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the binary
//
// Default level is info, debug with --verbose. RUST_LOG overrides both.

use console::style;
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Level used when RUST_LOG is unset.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger. Safe to call once per process.
pub fn init(verbose: bool) {
    let level = default_level(verbose);
    let env = Env::default().default_filter_or(level.as_str());

    let result = Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => style("ERROR").red().bold(),
                log::Level::Warn => style("WARN ").yellow(),
                log::Level::Info => style("INFO ").green(),
                log::Level::Debug => style("DEBUG").blue(),
                log::Level::Trace => style("TRACE").magenta(),
            };
            writeln!(buf, "{} {} {}", buf.timestamp_seconds(), level, record.args())
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with default level: {level}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Info);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
