//! Command-line interface argument parsing.

use crate::labels::Language;
use clap::Parser;
use std::path::PathBuf;

/// Build the ICT professionals' migration dashboard from a CSV export.
///
/// Prints every tab to the terminal and can hand the assembled dashboard to
/// an external renderer as JSON, or export each chart's data as CSV.
///
/// Examples:
///   ict_dashboard emigrate_ict.csv
///   ict_dashboard data.csv --lang en --json dashboard.json
///   ict_dashboard data.csv --export-dir views/ --preview-rows 10
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input CSV with a header row
    #[arg(
        value_name = "DATA",
        default_value = "emigrate_ict.csv",
        env = "ICT_DASHBOARD_DATA"
    )]
    pub data: PathBuf,

    /// Language of titles and labels
    #[arg(long, value_enum, default_value_t = Language::Fa)]
    pub lang: Language,

    /// Write the assembled dashboard as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Write one CSV per chart into this directory
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Rows shown per chart in the terminal preview
    #[arg(long, default_value = "5", value_name = "COUNT")]
    pub preview_rows: usize,

    /// Enable verbose logging output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["ict_dashboard", "profiles.csv"]).unwrap();
        assert_eq!(args.data, PathBuf::from("profiles.csv"));
        assert_eq!(args.lang, Language::Fa);
        assert_eq!(args.preview_rows, 5);
        assert!(args.json.is_none());
        assert_eq!(args.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from([
            "ict_dashboard",
            "profiles.csv",
            "--lang",
            "en",
            "--json",
            "out.json",
            "--export-dir",
            "views",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.lang, Language::En);
        assert_eq!(args.json, Some(PathBuf::from("out.json")));
        assert_eq!(args.export_dir, Some(PathBuf::from("views")));
        assert_eq!(args.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["ict_dashboard", "-v", "-q"]).is_err());
    }
}
