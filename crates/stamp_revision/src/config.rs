// crates/stamp_revision/src/config.rs

use clap::Parser;
use log::LevelFilter;

/// Command line for `stamp_revision`. Input and output are always stdin and
/// stdout; the flags only affect diagnostics.
#[derive(Parser, Debug)]
#[command(
    name = "stamp_revision",
    version,
    about = "Replaces the text between $: and :$ markers on stdin with the current Git revision"
)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StampConfig {
    /// Level used when `RUST_LOG` is not set.
    pub log_level: LevelFilter,
}

impl StampConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let log_level = if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        StampConfig { log_level }
    }

    /// Default `EnvFilter` directive for this configuration.
    pub fn log_directive(&self) -> String {
        self.log_level.to_string().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        let cli = Cli::try_parse_from(["stamp_revision"]).unwrap();
        let config = StampConfig::from_cli(&cli);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.log_directive(), "warn");
    }

    #[test]
    fn verbose_enables_debug() {
        let cli = Cli::try_parse_from(["stamp_revision", "--verbose"]).unwrap();
        assert_eq!(StampConfig::from_cli(&cli).log_directive(), "debug");

        let cli = Cli::try_parse_from(["stamp_revision", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["stamp_revision", "input.txt"]).is_err());
    }
}
