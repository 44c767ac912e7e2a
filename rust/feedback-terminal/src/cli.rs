use std::path::PathBuf;

use clap::Parser;
use feedback_tally::Locale;

/// Command line arguments of the `feedback` binary.
#[derive(Debug, Parser)]
#[command(name = "feedback")]
#[command(bin_name = "feedback")]
#[command(about = "Collect feedback from the terminal", long_about = None)]
pub struct FeedbackCli {
    /// Label table to use (uk or en)
    #[arg(short, long, default_value_t = Locale::Ukrainian)]
    pub locale: Locale,

    /// Write logs to this file; filtered by RUST_LOG
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn it_defaults_to_ukrainian_without_a_log_file() -> TestResult {
        let cli = FeedbackCli::try_parse_from(["feedback"])?;

        assert_eq!(cli.locale, Locale::Ukrainian);
        assert_eq!(cli.log_file, None);
        Ok(())
    }

    #[test]
    fn it_accepts_a_locale_and_a_log_file() -> TestResult {
        let cli = FeedbackCli::try_parse_from(["feedback", "-l", "en", "--log-file", "out.log"])?;

        assert_eq!(cli.locale, Locale::English);
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        Ok(())
    }

    #[test]
    fn it_rejects_unknown_locales() {
        assert!(FeedbackCli::try_parse_from(["feedback", "--locale", "fr"]).is_err());
    }
}
