//! Tally: a small arithmetic library with an `add` command
//!
//! ```
//! use tally::{add, divide_int, BigInt, Number};
//!
//! assert_eq!(add(1, 2), Number::from(3));
//! assert_eq!(add(0.1, 3), Number::Float(3.1));
//! assert_eq!(divide_int(3, 1.6).unwrap(), BigInt::from(1));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod math;

pub use math::{add, divide_int, ArithError, Number};
pub use num_bigint::BigInt;

use std::io::{self, Write};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Greeting printed by [`hello_world`]
pub const GREETING: &str = "This is my first Rust crate!";

/// Print the crate greeting to stdout
pub fn hello_world() -> io::Result<()> {
    hello_world_to(&mut io::stdout().lock())
}

pub fn hello_world_to<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}
