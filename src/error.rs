//! Common error types for command processing

/// Status code reported for a successfully processed line.
pub const STATUS_OK: i32 = 0;
/// Status code for a missing input or output buffer.
pub const STATUS_CALLER_CONTRACT: i32 = -1;
/// Status code for an input line at or beyond the line capacity.
pub const STATUS_OVERFLOW: i32 = -2;
/// Status code for a command word that matched no known command.
pub const STATUS_UNKNOWN_COMMAND: i32 = 1;

/// An error that stops a line from producing a response.
///
/// Each variant maps onto the numeric status code reported across the
/// serial boundary, see [`Error::status`]. Argument-level failures of the
/// `dec` command are not represented here: they are answered with a textual
/// response and a successful status.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A required input or output buffer was not supplied.
    CallerContract,
    /// The input line reached or exceeded the line capacity.
    Overflow,
    /// The command word did not match any known command.
    UnknownCommand,
    /// A handler failed with its own non-zero status code.
    Handler(i32),
}

impl Error {
    /// The status code reported to the caller for this error.
    ///
    /// ```rust
    /// use serialcmd::error::Error;
    ///
    /// assert_eq!(Error::CallerContract.status(), -1);
    /// assert_eq!(Error::Overflow.status(), -2);
    /// assert_eq!(Error::UnknownCommand.status(), 1);
    /// assert_eq!(Error::Handler(7).status(), 7);
    /// ```
    pub fn status(&self) -> i32 {
        match self {
            Error::CallerContract => STATUS_CALLER_CONTRACT,
            Error::Overflow => STATUS_OVERFLOW,
            Error::UnknownCommand => STATUS_UNKNOWN_COMMAND,
            Error::Handler(code) => *code,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::CallerContract => defmt::write!(f, "CallerContract"),
            Error::Overflow => defmt::write!(f, "Overflow"),
            Error::UnknownCommand => defmt::write!(f, "UnknownCommand"),
            Error::Handler(code) => defmt::write!(f, "Handler({})", code),
        }
    }
}
