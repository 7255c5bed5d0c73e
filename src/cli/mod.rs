//! CLI module - argument parsing, logging setup and the `add` command

pub mod args;
pub mod commands;
pub mod error;

pub use args::{exit_with_usage, usage_for, AddCli, GlobalOpts};
pub use error::{CliError, Result};

use std::ffi::OsString;
use std::io::{self, Write};
use tracing::Level;

/// Run the `add` command, printing the sum to stdout
///
/// `args` is an explicit argument list (without the program name); `None`
/// reads the live process arguments. Bad arguments come back as
/// [`CliError::Usage`] and nothing is printed; pass the inner error to
/// [`exit_with_usage`] to report it the way the `add` binary does.
pub fn cmd_add<I, T>(args: Option<I>) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    cmd_add_to(args, &mut io::stdout().lock())
}

/// Same as [`cmd_add`], writing the sum to `out`
pub fn cmd_add_to<I, T, W>(args: Option<I>, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = AddCli::try_from_args(args)?;
    init_logging(cli.global.verbose);
    commands::add::run(&cli, out)
}

/// Install the stderr log subscriber
///
/// Only warnings and errors are shown unless `verbose` is set. Calling this
/// more than once is harmless; the first subscriber wins.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
