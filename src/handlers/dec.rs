//! Base-prefixed integer conversion for the `dec` command.
//!
//! The argument selects its own base:
//!
//! | Prefix | Base | Example  | Response |
//! |--------|------|----------|----------|
//! | `0x`   | 16   | `0x10`   | `16`     |
//! | `0b`   | 2    | `0b101`  | `5`      |
//! | `0`    | 8    | `010`    | `8`      |
//! | none   | 10   | `65535`  | `65535`  |
//!
//! Anything that is not a complete, in-range unsigned 16-bit literal is
//! answered with [`ARGUMENT_ERROR`]. The command itself never fails.

use super::{push_response, Context};
use crate::command::{Command, Line};
use crate::error::Error;
use core::fmt::Write;

/// Response text for a malformed or out-of-range argument.
pub const ARGUMENT_ERROR: &str = "ARGUMENT ERROR";

/// Why an argument was rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArgumentError {
    /// No digits remained after the base prefix.
    Empty,
    /// A character was not a digit of the selected base.
    InvalidDigit,
    /// The value does not fit in 16 bits.
    OutOfRange,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ArgumentError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ArgumentError::Empty => defmt::write!(f, "Empty"),
            ArgumentError::InvalidDigit => defmt::write!(f, "InvalidDigit"),
            ArgumentError::OutOfRange => defmt::write!(f, "OutOfRange"),
        }
    }
}

/// Split off the base prefix, returning the base and the digits to parse.
fn split_base(argument: &str) -> (u32, &str) {
    let bytes = argument.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' => (16, &argument[2..]),
            b'b' => (2, &argument[2..]),
            _ => (8, &argument[1..]),
        }
    } else {
        (10, argument)
    }
}

/// Parse a base-prefixed unsigned 16-bit integer.
///
/// # Examples
///
/// ```rust
/// use serialcmd::handlers::{parse_u16, ArgumentError};
///
/// assert_eq!(parse_u16("0xFFFF"), Ok(0xFFFF));
/// assert_eq!(parse_u16("0b"), Err(ArgumentError::Empty));
/// assert_eq!(parse_u16("09"), Err(ArgumentError::InvalidDigit));
/// assert_eq!(parse_u16("65536"), Err(ArgumentError::OutOfRange));
/// ```
pub fn parse_u16(argument: &str) -> Result<u16, ArgumentError> {
    let (base, digits) = split_base(argument);
    if digits.is_empty() {
        return Err(ArgumentError::Empty);
    }

    let mut value: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(base).ok_or(ArgumentError::InvalidDigit)?;
        value = value * base + digit;
        if value > u32::from(u16::MAX) {
            return Err(ArgumentError::OutOfRange);
        }
    }

    // Bounded by the check above.
    Ok(value as u16)
}

/// Render the decimal value of `argument`, or [`ARGUMENT_ERROR`].
///
/// ```rust
/// use serialcmd::handlers::parse_dec;
///
/// assert_eq!(parse_dec("0x10").as_str(), "16");
/// assert_eq!(parse_dec("abc").as_str(), "ARGUMENT ERROR");
/// ```
pub fn parse_dec(argument: &str) -> Line {
    let mut out = Line::new();
    match parse_u16(argument) {
        // Five digits at most.
        Ok(value) => {
            let _ = write!(out, "{}", value);
        }
        Err(_) => {
            let _ = out.push_str(ARGUMENT_ERROR);
        }
    }
    out
}

/// Handler for the `dec` command.
pub fn handle(_ctx: &Context<'_>, cmd: &Command, out: &mut Line) -> Result<(), Error> {
    push_response(out, &parse_dec(cmd.argument()))
}
