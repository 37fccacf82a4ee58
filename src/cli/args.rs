//! CLI argument definitions using clap

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::accumulate::{Op, ParsedArguments};

/// Process some integers.
#[derive(Parser, Debug)]
#[command(name = "accum")]
#[command(version, about = "Process some integers.", long_about = None)]
pub struct Cli {
    /// an integer for the accumulator
    #[arg(
        value_name = "N",
        num_args = 1..,
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub integers: Vec<i64>,

    /// sum the integers (default: find the max)
    #[arg(long)]
    pub sum: bool,

    /// Enable debug logging (repeat for more verbosity)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completion: Option<Shell>,
}

impl Cli {
    /// Project the parsed flag set into the record the reduction consumes.
    pub fn to_parsed(&self) -> ParsedArguments {
        let operation = if self.sum { Op::Sum } else { Op::Max };
        ParsedArguments::new(self.integers.clone(), operation)
    }
}

/// Terminal outcome of one parse attempt.
///
/// Help and version are a distinct outcome rather than an error so that
/// callers and tests observe the short-circuit deterministically.
#[derive(Debug)]
pub enum ParseOutcome {
    /// The token sequence satisfied the grammar.
    Parsed(Cli),
    /// A help or version flag short-circuited parsing; the rendered text
    /// belongs on stdout and the process exits successfully.
    Help(String),
    /// The token sequence violated the grammar; the rendered diagnostic
    /// belongs on stderr and the process exits with a usage error code.
    Usage(String),
}

/// Parse a raw token sequence (argv, program name first).
///
/// Total over any input: never prints, never exits the process.
pub fn parse_tokens<I, T>(tokens: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(tokens) {
        Ok(cli) => ParseOutcome::Parsed(cli),
        Err(e) => {
            let rendered = e.render().to_string();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseOutcome::Help(rendered),
                _ => ParseOutcome::Usage(rendered),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    fn parsed(outcome: ParseOutcome) -> Cli {
        match outcome {
            ParseOutcome::Parsed(cli) => cli,
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn integers_without_flag_select_max() {
        let cli = parsed(parse_tokens(["accum", "1", "2", "3"]));
        assert_eq!(cli.integers, vec![1, 2, 3]);
        assert_eq!(cli.to_parsed().operation, Op::Max);
    }

    #[test]
    fn sum_flag_selects_sum() {
        let cli = parsed(parse_tokens(["accum", "--sum", "1", "2"]));
        assert_eq!(cli.to_parsed().operation, Op::Sum);
    }

    #[test]
    fn negative_literals_are_values_not_flags() {
        let cli = parsed(parse_tokens(["accum", "-3", "-7"]));
        assert_eq!(cli.integers, vec![-3, -7]);
    }

    #[rstest]
    #[case::non_integer_token(&["accum", "1", "two", "3"])]
    #[case::unknown_flag(&["accum", "--frobnicate", "1"])]
    #[case::no_integers(&["accum"])]
    #[case::sum_without_integers(&["accum", "--sum"])]
    #[case::out_of_range_literal(&["accum", "99999999999999999999"])]
    fn grammar_violations_yield_usage(#[case] tokens: &[&str]) {
        let outcome = parse_tokens(tokens.iter().copied());
        assert!(matches!(outcome, ParseOutcome::Usage(_)), "{outcome:?}");
    }

    #[rstest]
    #[case::help(&["accum", "--help"])]
    #[case::help_with_other_args(&["accum", "--help", "1", "2"])]
    #[case::version(&["accum", "--version"])]
    fn help_short_circuits_parsing(#[case] tokens: &[&str]) {
        let outcome = parse_tokens(tokens.iter().copied());
        assert!(matches!(outcome, ParseOutcome::Help(_)), "{outcome:?}");
    }

    #[test]
    fn help_text_describes_the_arguments() {
        match parse_tokens(["accum", "--help"]) {
            ParseOutcome::Help(text) => {
                assert!(text.contains("an integer for the accumulator"));
                assert!(text.contains("sum the integers (default: find the max)"));
            }
            other => panic!("expected Help, got {other:?}"),
        }
    }

    #[test]
    fn completion_waives_integer_arity() {
        let cli = parsed(parse_tokens(["accum", "--completion", "bash"]));
        assert!(cli.integers.is_empty());
        assert_eq!(cli.completion, Some(Shell::Bash));
    }
}
