//! `add` command - sum two numbers
//!
//! # Usage
//!
//! ```bash
//! add 1 3      # prints 4
//! add 1 2.2    # prints 3.2
//! add 0.5 2.5  # prints 3.0
//! ```

use std::io::Write;
use tracing::debug;

use crate::cli::args::AddCli;
use crate::cli::error::Result;
use crate::math::{self, Number};

pub fn run<W: Write>(cli: &AddCli, out: &mut W) -> Result<()> {
    let x = Number::normalize(cli.x);
    let y = Number::normalize(cli.y);
    debug!(raw_x = cli.x, raw_y = cli.y, %x, %y, "normalized operands");

    let sum = math::add(x, y);
    debug!(%sum, is_int = sum.is_int(), "computed sum");

    writeln!(out, "{sum}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(x: f64, y: f64) -> Result<String> {
        let cli = AddCli {
            x,
            y,
            global: Default::default(),
        };
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_whole_numbers_print_as_integer() {
        assert_eq!(run_with(1.0, 3.0).unwrap(), "4\n");
        assert_eq!(run_with(-2.0, 2.0).unwrap(), "0\n");
    }

    #[test]
    fn test_fractional_operand_prints_as_float() {
        assert_eq!(run_with(1.0, 2.2).unwrap(), "3.2\n");
        assert_eq!(run_with(0.5, 2.5).unwrap(), "3.0\n");
    }

    #[test]
    fn test_large_whole_numbers_stay_integer() {
        assert_eq!(run_with(1e19, 1.0).unwrap(), "10000000000000000001\n");
        assert_eq!(run_with(9e18, 9e18).unwrap(), "18000000000000000000\n");
    }
}
