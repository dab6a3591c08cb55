use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::Parser;

/// A command-line mood journal with keyword-based mood tracking
///
/// All journaling happens through the interactive menu; the flags only
/// change where files live and how much is logged.
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Path of the JSON journal (overrides MOOD_JOURNAL_FILE)
    #[clap(long, value_name = "PATH")]
    pub journal: Option<String>,

    /// Path of the text export (overrides MOOD_EXPORT_FILE)
    #[clap(long, value_name = "PATH")]
    pub export: Option<String>,

    /// Log debug output to stderr
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Format of log output on stderr
    #[clap(long, value_name = "FORMAT", default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,
}

impl CliArgs {
    /// Whether logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["mood-journal"]);
        assert!(args.journal.is_none());
        assert!(args.export.is_none());
        assert!(!args.verbose);
        assert_eq!(args.log_format, "text");
        assert!(!args.json_logs());
    }

    #[test]
    fn test_path_options() {
        let args = CliArgs::parse_from(vec![
            "mood-journal",
            "--journal",
            "/tmp/j.json",
            "--export",
            "/tmp/e.txt",
        ]);
        assert_eq!(args.journal, Some("/tmp/j.json".to_string()));
        assert_eq!(args.export, Some("/tmp/e.txt".to_string()));
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(vec!["mood-journal", "--verbose"]);
        assert!(args.verbose);

        let args = CliArgs::parse_from(vec!["mood-journal", "-v"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_log_format() {
        let args = CliArgs::parse_from(vec!["mood-journal", "--log-format", "json"]);
        assert!(args.json_logs());

        let result = CliArgs::try_parse_from(vec!["mood-journal", "--log-format", "xml"]);
        assert!(result.is_err());
    }
}
