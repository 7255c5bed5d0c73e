//! CLI argument definitions using clap derive

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Program name used when parsing an explicit argument list
pub const BIN_NAME: &str = "add";

#[derive(Parser, Debug, Clone)]
#[command(name = BIN_NAME)]
#[command(version, about = "Add two numbers and print the sum")]
#[command(long_about = "Add two numbers and print the sum.\n\n\
Whole numbers such as 3 or 3.0 are added as integers and printed without a \
decimal point; anything else is added as a float.")]
pub struct AddCli {
    /// First operand
    #[arg(value_name = "X", allow_negative_numbers = true)]
    pub x: f64,

    /// Second operand
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    pub y: f64,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Enable verbose output (debug logs on stderr)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AddCli {
    /// Parse an explicit argument list, or the live process arguments when `None`
    ///
    /// An explicit list holds only the arguments, not the program name.
    pub fn try_from_args<I, T>(args: Option<I>) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match args {
            Some(args) => Self::try_parse_from(
                std::iter::once(OsString::from(BIN_NAME)).chain(args.into_iter().map(Into::into)),
            ),
            None => Self::try_parse(),
        }
    }
}

/// Usage line to show alongside a parse failure
///
/// `None` for `--help` and `--version`, which are not failures.
pub fn usage_for(err: &clap::Error) -> Option<String> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(AddCli::command().render_usage().to_string()),
    }
}

/// Print the usage line for `err` to stderr, then exit with clap's message and status
pub fn exit_with_usage(err: clap::Error) -> ! {
    if let Some(usage) = usage_for(&err) {
        eprintln!("{usage}");
    }
    err.exit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_operands() {
        let cli = AddCli::try_from_args(Some(["1", "2.5"])).unwrap();
        assert_eq!(cli.x, 1.0);
        assert_eq!(cli.y, 2.5);
        assert!(!cli.global.verbose);
    }

    #[test]
    fn test_parse_negative_operands() {
        let cli = AddCli::try_from_args(Some(["-1", "-2.5"])).unwrap();
        assert_eq!(cli.x, -1.0);
        assert_eq!(cli.y, -2.5);
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = AddCli::try_from_args(Some(["-v", "1", "2"])).unwrap();
        assert!(cli.global.verbose);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = AddCli::try_from_args(Some(["a", "1"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let err = AddCli::try_from_args(Some(["1"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = AddCli::try_from_args(Some(["1", "2", "3"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_usage_for_parse_failures() {
        let err = AddCli::try_from_args(Some(["a", "1"])).unwrap_err();
        let usage = usage_for(&err).unwrap();
        assert!(usage.starts_with("Usage: add"));
        assert!(usage.contains("<X> <Y>"));

        let err = AddCli::try_from_args(Some(["1"])).unwrap_err();
        assert!(usage_for(&err).is_some());
    }

    #[test]
    fn test_no_usage_for_help_and_version() {
        let err = AddCli::try_from_args(Some(["--help"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(usage_for(&err).is_none());

        let err = AddCli::try_from_args(Some(["--version"])).unwrap_err();
        assert!(usage_for(&err).is_none());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        AddCli::command().debug_assert();
    }
}
