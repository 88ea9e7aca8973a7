//! Command-line argument parsing.
//!
//! This module handles parsing command-line arguments and determining
//! which command to execute.

/// Config overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Override the initial list endpoint URL
    pub endpoint: Option<String>,
    /// Override the server's fixed page size
    pub page_size: Option<u64>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown arguments are ignored; a flag that expects a value but is missing
/// one is likewise ignored.
///
/// # Examples
///
/// ```
/// use holodex::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["holodex".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1); // Skip the program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--endpoint" => {
                if let Some(url) = args.next() {
                    overrides.endpoint = Some(url);
                }
            }
            "--page-size" => {
                if let Some(raw) = args.next() {
                    if let Ok(n) = raw.parse::<u64>() {
                        overrides.page_size = Some(n);
                    }
                }
            }
            _ => {}
        }
    }

    CliCommand::RunTui(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["holodex", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["holodex", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args_runs_tui() {
        assert_eq!(parse(&["holodex"]), CliCommand::RunTui(CliOverrides::default()));
    }

    #[test]
    fn test_parse_endpoint_override() {
        let cmd = parse(&["holodex", "--endpoint", "http://localhost:8000/people/"]);
        match cmd {
            CliCommand::RunTui(overrides) => {
                assert_eq!(
                    overrides.endpoint.as_deref(),
                    Some("http://localhost:8000/people/")
                );
                assert_eq!(overrides.page_size, None);
            }
            other => panic!("expected RunTui, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_page_size_override() {
        let cmd = parse(&["holodex", "--page-size", "25"]);
        match cmd {
            CliCommand::RunTui(overrides) => assert_eq!(overrides.page_size, Some(25)),
            other => panic!("expected RunTui, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_ignores_unknown_and_malformed() {
        let cmd = parse(&["holodex", "--wat", "--page-size", "not-a-number"]);
        assert_eq!(cmd, CliCommand::RunTui(CliOverrides::default()));
    }
}
