use miette::Result;
use std::ffi::OsString;
use tally::cli::{cmd_add, exit_with_usage, CliError};

fn main() -> Result<()> {
    // Reset SIGPIPE so `add 1 2 | head` terminates quietly instead of panicking.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))?;

    match cmd_add(None::<Vec<OsString>>) {
        Err(CliError::Usage(err)) => exit_with_usage(err),
        result => Ok(result?),
    }
}
