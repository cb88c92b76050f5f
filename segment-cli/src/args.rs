//! Command-line arguments

use std::path::PathBuf;

use anyhow::{bail, Context};

pub const USAGE: &str = "\
usage: segment-cli [--config PATH] [--strict] [TEXT]

Shows TEXT (default \"hello\"), then each line read from stdin, on a
4-digit 7-segment display. Exits when stdin is closed.

options:
  -c, --config PATH  load pin wiring and timing from a TOML file
  -s, --strict       reject text longer than four characters
  -h, --help         print this message";

/// Text shown before the first line arrives on stdin
pub const DEFAULT_TEXT: &str = "hello";

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub text: String,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: None,
            strict: false,
            text: DEFAULT_TEXT.into(),
            help: false,
        }
    }
}

impl Args {
    /// Parse arguments, not including the program name
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut text = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args.next().context("--config needs a path")?;
                    parsed.config = Some(path.into());
                }
                "-s" | "--strict" => parsed.strict = true,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    bail!("unknown option {}", flag)
                }
                _ => {
                    if text.replace(arg).is_some() {
                        bail!("only one initial TEXT may be given");
                    }
                }
            }
        }

        if let Some(text) = text {
            parsed.text = text;
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.text, "hello");
    }

    #[test]
    fn test_all_options() {
        let args = parse(&["--config", "/etc/segment.toml", "--strict", "12.34"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/segment.toml")));
        assert!(args.strict);
        assert_eq!(args.text, "12.34");
        assert!(!args.help);
    }

    #[test]
    fn test_short_options() {
        let args = parse(&["-s", "-c", "a.toml", "-h"]).unwrap();
        assert!(args.strict);
        assert!(args.help);
        assert_eq!(args.config, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn test_lone_dash_is_text() {
        let args = parse(&["-"]).unwrap();
        assert_eq!(args.text, "-");
    }

    #[test]
    fn test_missing_config_path() {
        let err = parse(&["--config"]).unwrap_err();
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown option --verbose");
    }

    #[test]
    fn test_two_texts_rejected() {
        assert!(parse(&["ab", "cd"]).is_err());
    }
}
