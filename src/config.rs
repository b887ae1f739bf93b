//! Configuration for the `netfun` command line

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use clap::builder::BoolishValueParser;
use clap::Args;
use derive_builder::Builder;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Settings shared by every command
#[derive(Args, Builder, Clone, Debug, Deserialize, Serialize, PartialEq)]
#[builder(setter(into))]
pub struct Config {
    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "debug")]
    log_level: String,
    /// Write re-encoded documents on a single line instead of pretty-printing them.
    /// `NETFUN_COMPACT` accepts `1`/`0`, `yes`/`no`, `on`/`off` and `true`/`false`
    #[arg(
        long,
        global = true,
        env = "NETFUN_COMPACT",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            compact: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Falls back to `Debug` when the configured level is not recognised
    pub fn get_log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Debug)
    }

    pub fn get_compact(&self) -> bool {
        self.compact
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut output = String::default();
        output += &format!("Log level:      {}\n", self.get_log_level());
        output += &format!("Compact output: {}\n", self.compact);

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod config_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(LevelFilter::Debug, config.get_log_level());
        assert!(!config.get_compact());
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::default()
            .log_level("warn")
            .compact(true)
            .build()
            .unwrap();

        assert_eq!(LevelFilter::Warn, config.get_log_level());
        assert!(config.get_compact());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_debug() {
        let config = ConfigBuilder::default()
            .log_level("chatty")
            .compact(false)
            .build()
            .unwrap();

        assert_eq!(LevelFilter::Debug, config.get_log_level());
    }

    #[test]
    fn test_compact_env_accepts_boolish_values() {
        use clap::Parser;

        #[derive(Parser)]
        struct Command {
            #[command(flatten)]
            config: Config,
        }

        std::env::set_var("NETFUN_COMPACT", "1");
        let enabled = Command::try_parse_from(["netfun"]).map(|c| c.config.get_compact());
        std::env::set_var("NETFUN_COMPACT", "off");
        let disabled = Command::try_parse_from(["netfun"]).map(|c| c.config.get_compact());
        std::env::remove_var("NETFUN_COMPACT");

        assert!(enabled.unwrap());
        assert!(!disabled.unwrap());
    }

    #[test]
    fn test_config_from_json() {
        let config: Config =
            serde_json::from_str(r#"{ "log_level": "trace", "compact": true }"#).unwrap();
        assert_eq!(LevelFilter::Trace, config.get_log_level());
        assert!(config.get_compact());
    }

    #[test]
    fn test_display() {
        let expected = "Log level:      DEBUG\nCompact output: false\n";
        assert_eq!(expected, Config::default().to_string());
    }
}
