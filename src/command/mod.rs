//! Tokenized command lines and the static command table.
//!
//! A raw line is split into a command word and a single raw argument:
//!
//! ```text
//! "DEC  0x10"  ──▶  name: "dec"   argument: " 0x10"   token: Dec
//!      ▲                                ▲
//!      └─ first separator is dropped    └─ later separators are kept
//! ```
//!
//! The command word is case-folded to lowercase so `MAC`, `Mac` and `mac`
//! resolve to the same command. The argument is kept verbatim. Only the
//! single separator that ends the command word is elided; every further
//! space or tab is copied into the argument as-is.
//!
//! # Examples
//!
//! ```rust
//! use serialcmd::command::{Command, Token};
//!
//! let cmd = Command::parse("Status now").unwrap();
//! assert_eq!(cmd.token(), Token::Status);
//! assert_eq!(cmd.name(), "status");
//! assert_eq!(cmd.argument(), "now");
//! ```

use crate::error::Error;
use crate::handlers::{self, HandlerFn};
use heapless::String;


/// Capacity in bytes of every line buffer, including the terminator slot.
///
/// Input lines must be strictly shorter than this; at most `MAX_LINE - 1`
/// data bytes are ever stored in a [`Line`].
pub const MAX_LINE: usize = 128;

/// Fixed-capacity text buffer used for command words, arguments and responses.
pub type Line = String<MAX_LINE>;

/// Characters that end the command word.
const SEPARATORS: [char; 2] = [' ', '\t'];

/// The closed set of commands understood by the interpreter.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Token {
    /// The command word matched no known command.
    #[default]
    Unknown,
    /// Report the device MAC address.
    Mac,
    /// Report the device identity string.
    Id,
    /// Report uptime, core count and free heap.
    Status,
    /// Convert a base-prefixed integer to decimal.
    Dec,
}

impl From<&str> for Token {
    /// Resolve an already case-folded command word against [`COMMANDS`].
    fn from(name: &str) -> Self {
        COMMANDS
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.token)
            .unwrap_or(Token::Unknown)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Token {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Token::Unknown => defmt::write!(f, "Unknown"),
            Token::Mac => defmt::write!(f, "Mac"),
            Token::Id => defmt::write!(f, "Id"),
            Token::Status => defmt::write!(f, "Status"),
            Token::Dec => defmt::write!(f, "Dec"),
        }
    }
}

/// An entry of the static command table.
#[derive(Clone, Copy)]
pub struct CommandDef {
    /// The lowercase command word.
    pub name: &'static str,
    /// The token the command word resolves to.
    pub token: Token,
    /// A one-line description suitable for a command listing.
    pub description: &'static str,
    /// The function producing the response.
    pub handler: HandlerFn,
}

impl core::fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("token", &self.token)
            .finish()
    }
}

/// Every known command, one entry per non-[`Unknown`](Token::Unknown) token.
pub static COMMANDS: [CommandDef; 4] = [
    CommandDef {
        name: "mac",
        token: Token::Mac,
        description: "Show the device MAC address",
        handler: handlers::mac::handle,
    },
    CommandDef {
        name: "id",
        token: Token::Id,
        description: "Show the device identity",
        handler: handlers::id::handle,
    },
    CommandDef {
        name: "status",
        token: Token::Status,
        description: "Show uptime, core count and free heap",
        handler: handlers::status::handle,
    },
    CommandDef {
        name: "dec",
        token: Token::Dec,
        description: "Convert a 0x/0b/0-prefixed number to decimal",
        handler: handlers::dec::handle,
    },
];

/// Look up the table entry for a token.
///
/// Returns `None` for [`Token::Unknown`].
pub fn lookup(token: Token) -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|def| def.token == token)
}

/// A single tokenized input line.
///
/// Built fresh for every line and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    token: Token,
    name: Line,
    argument: Line,
}

impl Command {
    /// Tokenize a line using the full [`MAX_LINE`] capacity.
    pub fn parse(input: &str) -> Result<Self, Error> {
        tokenize(input, MAX_LINE)
    }

    /// The resolved command token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// The lowercase command word.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything after the first separator, case preserved.
    pub fn argument(&self) -> &str {
        &self.argument
    }
}

/// Split `input` into a command word and a raw argument.
///
/// `max_len` is the capacity of the caller's buffer including the terminator
/// slot; it is clamped to [`MAX_LINE`]. Inputs of `max_len` bytes or more are
/// rejected with [`Error::Overflow`] and no partial command is produced.
///
/// # Examples
///
/// ```rust
/// use serialcmd::command::{tokenize, Token};
/// use serialcmd::error::Error;
///
/// let cmd = tokenize("mAc", 16).unwrap();
/// assert_eq!(cmd.token(), Token::Mac);
/// assert_eq!(cmd.argument(), "");
///
/// assert_eq!(tokenize("0123456789abcdef", 16), Err(Error::Overflow));
/// ```
pub fn tokenize(input: &str, max_len: usize) -> Result<Command, Error> {
    let limit = max_len.min(MAX_LINE);
    if input.len() >= limit {
        return Err(Error::Overflow);
    }

    let mut cmd = Command::default();
    let mut has_split = false;

    for c in input.chars() {
        if !has_split {
            if SEPARATORS.contains(&c) {
                has_split = true;
                continue;
            }
            cmd.name
                .push(c.to_ascii_lowercase())
                .map_err(|_| Error::Overflow)?;
        } else {
            cmd.argument.push(c).map_err(|_| Error::Overflow)?;
        }
    }

    cmd.token = Token::from(cmd.name.as_str());
    Ok(cmd)
}
