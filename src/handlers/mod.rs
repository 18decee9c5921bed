//! Response handlers for the known commands.
//!
//! Every handler has the same shape, [`HandlerFn`]: it receives the injected
//! [`Context`], the tokenized [`Command`] and a scratch [`Line`] to write its
//! response into. A handler signals failure only for conditions that leave it
//! without any sensible answer; argument problems are answered in text.

use crate::command::{Command, Line};
use crate::config::Config;
use crate::error::Error;
use crate::platform::Platform;

pub mod dec;
pub mod id;
pub mod mac;
pub mod status;

pub use dec::{parse_dec, parse_u16, ArgumentError, ARGUMENT_ERROR};
pub use mac::{format_mac, MAC_STRING_LEN};

/// Handler status for a response that did not fit into a [`Line`].
pub const HANDLER_RESPONSE_OVERFLOW: i32 = 2;

/// Everything a handler may consult besides the command itself.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Hardware and system information source.
    pub platform: &'a dyn Platform,
    /// Device configuration.
    pub config: &'a Config,
}

impl core::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

/// Function signature for command handlers.
pub type HandlerFn = fn(ctx: &Context<'_>, cmd: &Command, out: &mut Line) -> Result<(), Error>;

/// Append `text` to a response, failing with [`HANDLER_RESPONSE_OVERFLOW`].
pub(crate) fn push_response(out: &mut Line, text: &str) -> Result<(), Error> {
    out.push_str(text)
        .map_err(|_| Error::Handler(HANDLER_RESPONSE_OVERFLOW))
}
