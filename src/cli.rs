//! Command-line interface definitions.
//!
//! The mode is kept as a plain optional string so that a missing or unknown
//! mode reaches the driver, which answers with its own guidance instead of a
//! clap error.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::{ClientConfig, DEFAULT_ADDRESS};

/// Fill or size a named map on a remote map service.
#[derive(Parser, Debug)]
#[command(name = "map-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// What to do: `fill` inserts random entries forever, `size` prints the map size.
    pub command: Option<String>,

    /// Arguments after the mode are ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Address of the map service.
    #[arg(long, default_value = DEFAULT_ADDRESS)]
    pub address: String,
}

impl Cli {
    /// Parse the command line, letting an unknown flag in mode position
    /// through as the mode so it gets the usual wrong-argument message.
    pub fn parse_lenient<I, T>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Cli::try_parse_from(&args) {
            Err(e) if e.kind() == ErrorKind::UnknownArgument => Ok(Cli {
                command: args.get(1).map(|a| a.to_string_lossy().into_owned()),
                rest: Vec::new(),
                address: DEFAULT_ADDRESS.to_string(),
            }),
            other => other,
        }
    }

    /// Client configuration derived from the flags.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new().address(self.address.clone()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_argument() {
        let cli = Cli::parse_from(["test"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.address, DEFAULT_ADDRESS);
    }

    #[test]
    fn test_parse_fill() {
        let cli = Cli::parse_from(["test", "fill"]);
        assert_eq!(cli.command.as_deref(), Some("fill"));
    }

    #[test]
    fn test_parse_unknown_mode_is_accepted() {
        let cli = Cli::parse_from(["test", "foo"]);
        assert_eq!(cli.command.as_deref(), Some("foo"));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let cli = Cli::parse_from(["test", "size", "extra", "more"]);
        assert_eq!(cli.command.as_deref(), Some("size"));
        assert_eq!(cli.rest, vec!["extra", "more"]);
    }

    #[test]
    fn test_flag_like_mode_reaches_the_driver() {
        let cli = Cli::parse_lenient(["test", "-x"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("-x"));
        assert_eq!(crate::Command::get("-x"), crate::Command::Invalid);

        let cli = Cli::parse_lenient(["test", "--bogus", "size"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("--bogus"));
    }

    #[test]
    fn test_lenient_parse_keeps_valid_flags() {
        let cli = Cli::parse_lenient(["test", "size", "--address", "10.1.2.3:5701"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("size"));
        assert_eq!(cli.address, "10.1.2.3:5701");
    }

    #[test]
    fn test_lenient_parse_still_rejects_missing_flag_value() {
        let err = Cli::parse_lenient(["test", "size", "--address"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_address_flag_before_mode() {
        let cli = Cli::parse_from(["test", "--address", "10.1.2.3:5701", "fill"]);
        assert_eq!(cli.command.as_deref(), Some("fill"));
        assert_eq!(cli.address, "10.1.2.3:5701");
    }

    #[test]
    fn test_address_flag() {
        let cli = Cli::parse_from(["test", "size", "--address", "10.1.2.3:5701"]);
        assert_eq!(cli.config().get_address(), "10.1.2.3:5701");
        assert_eq!(cli.config().get_map_name(), "persistent-map");
    }
}
