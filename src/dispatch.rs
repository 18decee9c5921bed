//! Command dispatch.
//!
//! The [`Dispatcher`] ties the pipeline together:
//!
//! ```text
//! raw line ──▶ tokenize ──▶ Command ──▶ COMMANDS lookup ──▶ handler ──▶ response
//! ```
//!
//! Two layers of failure exist. Structural failures (missing buffer, overlong
//! line, unknown command, failing handler) surface as an [`Error`] and a
//! non-zero status; nothing is written to the caller's output. Argument
//! problems of the `dec` command are answered with text and a zero status.
//!
//! # Examples
//!
//! ```rust
//! use serialcmd::command::Line;
//! use serialcmd::config::Config;
//! use serialcmd::dispatch::Dispatcher;
//! use serialcmd::platform::{MacType, Platform};
//!
//! struct Board;
//! impl Platform for Board {
//!     fn read_mac(&self, _kind: MacType) -> [u8; 6] { [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01] }
//!     fn uptime_seconds(&self) -> u64 { 12 }
//!     fn core_count(&self) -> u8 { 2 }
//!     fn free_heap_bytes(&self) -> u32 { 4096 }
//! }
//!
//! let board = Board;
//! let dispatcher = Dispatcher::new(&board, Config::default());
//!
//! assert_eq!(dispatcher.process("MAC").unwrap().as_str(), "MAC DE:AD:BE:EF:00:01");
//!
//! let mut out = Line::new();
//! assert_eq!(dispatcher.process_command(Some("dec 0x10"), Some(&mut out)), 0);
//! assert_eq!(out.as_str(), "16");
//! assert_eq!(dispatcher.process_command(Some("foobar"), Some(&mut out)), 1);
//! assert_eq!(out.as_str(), "16");
//! ```

use crate::command::{self, Command, CommandDef, Line, MAX_LINE};
use crate::config::Config;
use crate::error::{Error, STATUS_OK};
use crate::handlers::Context;
use crate::platform::Platform;

/// Routes tokenized lines to their handlers.
pub struct Dispatcher<'a> {
    platform: &'a dyn Platform,
    config: Config,
}

impl core::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a platform and configuration.
    pub fn new(platform: &'a dyn Platform, config: Config) -> Self {
        Self { platform, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the active configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Process one line and return its response.
    ///
    /// # Errors
    ///
    /// * [`Error::Overflow`] - the line is `MAX_LINE` bytes or longer
    /// * [`Error::UnknownCommand`] - the command word is not known
    /// * [`Error::Handler`] - the handler failed with its own status
    pub fn process(&self, input: &str) -> Result<Line, Error> {
        let cmd = command::tokenize(input, MAX_LINE).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected line: {}", _err);
        })?;

        let def = command::lookup(cmd.token()).ok_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::warn!("unknown command");
            Error::UnknownCommand
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("dispatch {}", cmd.token());

        self.run(def, &cmd)
    }

    /// Invoke a table entry's handler and clamp its response.
    fn run(&self, def: &CommandDef, cmd: &Command) -> Result<Line, Error> {
        let ctx = Context {
            platform: self.platform,
            config: &self.config,
        };
        let mut response = Line::new();
        (def.handler)(&ctx, cmd, &mut response)?;

        terminate(&mut response);
        Ok(response)
    }

    /// Status-code entry point for callers holding raw buffers.
    ///
    /// Returns `0` with the response in `output`, `-1` when either buffer is
    /// missing, `-2` when the input is too long, `1` for an unknown command, or
    /// a handler's own non-zero status. `output` is only written on success.
    pub fn process_command(&self, input: Option<&str>, output: Option<&mut Line>) -> i32 {
        let (Some(input), Some(output)) = (input, output) else {
            return Error::CallerContract.status();
        };

        store(self.process(input), output)
    }
}

/// Copy a successful response into `output`, or report the failure status.
fn store(result: Result<Line, Error>, output: &mut Line) -> i32 {
    match result {
        Ok(response) => {
            *output = response;
            STATUS_OK
        }
        Err(err) => err.status(),
    }
}

/// Clamp a response to `MAX_LINE - 1` bytes, leaving room for a terminator.
fn terminate(line: &mut Line) {
    let mut len = line.len().min(MAX_LINE - 1);
    while !line.is_char_boundary(len) {
        len -= 1;
    }
    line.truncate(len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{push_response, HANDLER_RESPONSE_OVERFLOW};
    use crate::command::Token;
    use crate::platform::MacType;

    struct IdlePlatform;

    impl Platform for IdlePlatform {
        fn read_mac(&self, _kind: MacType) -> [u8; 6] {
            [0; 6]
        }
        fn uptime_seconds(&self) -> u64 {
            0
        }
        fn core_count(&self) -> u8 {
            1
        }
        fn free_heap_bytes(&self) -> u32 {
            0
        }
    }

    fn failing_handler(_ctx: &Context<'_>, _cmd: &Command, out: &mut Line) -> Result<(), Error> {
        push_response(out, "partial")?;
        Err(Error::Handler(5))
    }

    fn flooding_handler(_ctx: &Context<'_>, _cmd: &Command, out: &mut Line) -> Result<(), Error> {
        loop {
            push_response(out, "0123456789")?;
        }
    }

    const FAILING: CommandDef = CommandDef {
        name: "fail",
        token: Token::Unknown,
        description: "Always fails",
        handler: failing_handler,
    };

    const FLOODING: CommandDef = CommandDef {
        name: "flood",
        token: Token::Unknown,
        description: "Never fits",
        handler: flooding_handler,
    };

    #[test]
    fn test_handler_status_propagates_without_output() {
        let platform = IdlePlatform;
        let dispatcher = Dispatcher::new(&platform, Config::default());
        let cmd = Command::parse("fail now").unwrap();

        assert_eq!(dispatcher.run(&FAILING, &cmd), Err(Error::Handler(5)));

        let mut out = Line::new();
        out.push_str("previous").unwrap();
        assert_eq!(store(dispatcher.run(&FAILING, &cmd), &mut out), 5);
        assert_eq!(out.as_str(), "previous");
    }

    #[test]
    fn test_response_overflow_status() {
        let platform = IdlePlatform;
        let dispatcher = Dispatcher::new(&platform, Config::default());
        let cmd = Command::parse("flood").unwrap();

        let mut out = Line::new();
        assert_eq!(
            store(dispatcher.run(&FLOODING, &cmd), &mut out),
            HANDLER_RESPONSE_OVERFLOW
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_known_entry() {
        let platform = IdlePlatform;
        let dispatcher = Dispatcher::new(&platform, Config::default());
        let cmd = Command::parse("dec 0b11").unwrap();
        let def = command::lookup(cmd.token()).unwrap();

        assert_eq!(dispatcher.run(def, &cmd).unwrap().as_str(), "3");
    }

    #[test]
    fn test_terminate_clamps_full_line() {
        let mut line = Line::new();
        for _ in 0..MAX_LINE {
            line.push('x').unwrap();
        }
        terminate(&mut line);
        assert_eq!(line.len(), MAX_LINE - 1);
    }

    #[test]
    fn test_terminate_respects_char_boundary() {
        let mut line = Line::new();
        for _ in 0..MAX_LINE - 2 {
            line.push('x').unwrap();
        }
        line.push('é').unwrap();
        assert_eq!(line.len(), MAX_LINE);
        terminate(&mut line);
        assert_eq!(line.len(), MAX_LINE - 2);
    }

    #[test]
    fn test_terminate_leaves_short_line() {
        let mut line = Line::new();
        line.push_str("16").unwrap();
        terminate(&mut line);
        assert_eq!(line.as_str(), "16");
    }
}
