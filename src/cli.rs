//! CLI argument parsing for wordgrams

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for sequence reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "wordgrams")]
#[command(version)]
#[command(about = "Report the most common word sequences in text files or standard input", long_about = None)]
pub struct Cli {
    /// Files to read; standard input is read when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Report and reset after each file instead of one combined report
    #[arg(long = "reset-each")]
    pub reset_each: bool,

    /// Number of sequences to report (default: 100)
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Number of words per sequence (default: 3)
    #[arg(short = 's', long = "size", value_name = "N")]
    pub size: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file (result_limit, sequence_size)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_files_means_stdin() {
        let cli = Cli::parse_from(["wordgrams"]);
        assert!(cli.files.is_empty());
        assert!(!cli.reset_each);
    }

    #[test]
    fn test_cli_parses_files_in_order() {
        let cli = Cli::parse_from(["wordgrams", "moby-dick.txt", "brothers-karamazov.txt"]);
        assert_eq!(
            cli.files,
            vec![
                PathBuf::from("moby-dick.txt"),
                PathBuf::from("brothers-karamazov.txt")
            ]
        );
    }

    #[test]
    fn test_cli_reset_each_flag() {
        let cli = Cli::parse_from(["wordgrams", "--reset-each", "a.txt"]);
        assert!(cli.reset_each);
    }

    #[test]
    fn test_cli_limit_and_size() {
        let cli = Cli::parse_from(["wordgrams", "-n", "10", "--size", "2"]);
        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.size, Some(2));
    }

    #[test]
    fn test_cli_limit_and_size_default_unset() {
        let cli = Cli::parse_from(["wordgrams"]);
        assert_eq!(cli.limit, None);
        assert_eq!(cli.size, None);
    }

    #[test]
    fn test_cli_format_default_text() {
        let cli = Cli::parse_from(["wordgrams"]);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_format_json() {
        let cli = Cli::parse_from(["wordgrams", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_negative_limit() {
        assert!(Cli::try_parse_from(["wordgrams", "--limit", "-1"]).is_err());
    }

    #[test]
    fn test_cli_debug_default_false() {
        let cli = Cli::parse_from(["wordgrams", "a.txt"]);
        assert!(!cli.debug);
    }
}
