//! Byte-stream front end for the dispatcher.
//!
//! A [`Console`] sits between a serial receive path and the [`Dispatcher`].
//! It assembles lines from raw bytes with minimal line editing, dispatches
//! each completed line, and hands the response to an output function.
//!
//! # Character Handling
//!
//! - **CR/LF**: Ends the line; empty lines are ignored
//! - **Backspace/Delete**: Removes the last buffered character
//! - **Printable ASCII and TAB**: Buffered, echoed when echo is enabled
//! - **Other control characters**: Dropped
//!
//! # Examples
//!
//! ```rust
//! use serialcmd::config::Config;
//! use serialcmd::console::Console;
//! use serialcmd::dispatch::Dispatcher;
//! # use serialcmd::platform::{MacType, Platform};
//! # struct Board;
//! # impl Platform for Board {
//! #     fn read_mac(&self, _kind: MacType) -> [u8; 6] { [0; 6] }
//! #     fn uptime_seconds(&self) -> u64 { 0 }
//! #     fn core_count(&self) -> u8 { 1 }
//! #     fn free_heap_bytes(&self) -> u32 { 0 }
//! # }
//!
//! let board = Board;
//! let mut console = Console::new(Dispatcher::new(&board, Config::default()));
//! console.set_echo(false);
//! console.set_output_function(|text| print!("{}", text));
//!
//! assert_eq!(console.input(b"dec 0b101\r\n"), 0);
//! assert_eq!(console.input(b"reboot\n"), 1);
//! ```

use crate::command::{Line, MAX_LINE};
use crate::dispatch::Dispatcher;
use crate::error::{Error, STATUS_OK, STATUS_OVERFLOW, STATUS_UNKNOWN_COMMAND};

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII horizontal tab character (0x09).
pub const ASCII_TAB: u8 = 0x09;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;

/// Line terminator appended to every response.
pub const LINE_END: &str = "\r\n";

/// Function signature for output handlers.
///
/// Output handlers receive response text and forward it to the serial
/// transmitter, a log, or a test capture buffer.
pub type OutputFn = fn(&str);

/// Line assembler driving a [`Dispatcher`].
pub struct Console<'a> {
    dispatcher: Dispatcher<'a>,
    buffer: Line,
    overflowed: bool,
    output_fn: Option<OutputFn>,
    echo_enabled: bool,
}

impl core::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Console")
            .field("dispatcher", &self.dispatcher)
            .field("buffer", &self.buffer)
            .field("overflowed", &self.overflowed)
            .field("echo_enabled", &self.echo_enabled)
            .finish_non_exhaustive()
    }
}

impl<'a> Console<'a> {
    /// Create a console with echo enabled and no output function.
    pub fn new(dispatcher: Dispatcher<'a>) -> Self {
        Self {
            dispatcher,
            buffer: Line::new(),
            overflowed: false,
            output_fn: None,
            echo_enabled: true,
        }
    }

    /// Set the function receiving echoes and responses.
    pub fn set_output_function(&mut self, output_fn: OutputFn) {
        self.output_fn = Some(output_fn);
    }

    /// Enable or disable echoing of received characters.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_enabled = enabled;
    }

    /// The dispatcher lines are routed to.
    pub fn dispatcher(&self) -> &Dispatcher<'a> {
        &self.dispatcher
    }

    /// Mutable access to the dispatcher, e.g. to swap its configuration.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<'a> {
        &mut self.dispatcher
    }

    /// Bytes of the line currently being assembled.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Feed received bytes.
    ///
    /// Returns the status of the last line completed by this call, or `0`
    /// when no line was completed.
    pub fn input(&mut self, data: &[u8]) -> i32 {
        let mut status = STATUS_OK;

        for &byte in data {
            match byte {
                ASCII_CR | ASCII_LF => {
                    if self.echo_enabled {
                        self.output(if byte == ASCII_CR { "\r" } else { "\n" });
                    }
                    if let Some(line_status) = self.complete_line() {
                        status = line_status;
                    }
                }
                ASCII_BACKSPACE | ASCII_DEL => {
                    if self.buffer.pop().is_some() && self.echo_enabled {
                        self.output("\x08 \x08");
                    }
                }
                _ => {
                    if byte == ASCII_TAB || (0x20..0x7F).contains(&byte) {
                        self.push_byte(byte);
                    }
                }
            }
        }

        status
    }

    fn push_byte(&mut self, byte: u8) {
        if self.overflowed || self.buffer.len() >= MAX_LINE - 1 {
            self.overflowed = true;
            return;
        }

        let c = char::from(byte);
        if self.buffer.push(c).is_ok() && self.echo_enabled {
            let mut utf8 = [0u8; 4];
            self.output(c.encode_utf8(&mut utf8));
        }
    }

    /// Dispatch the buffered line. Returns `None` for an empty line.
    fn complete_line(&mut self) -> Option<i32> {
        if self.buffer.is_empty() && !self.overflowed {
            return None;
        }

        let status = if self.overflowed {
            Error::Overflow.status()
        } else {
            let mut response = Line::new();
            let status = self
                .dispatcher
                .process_command(Some(self.buffer.as_str()), Some(&mut response));
            if status == STATUS_OK {
                self.output(&response);
            }
            status
        };

        self.report(status);
        self.reset_buffer();
        Some(status)
    }

    /// Terminate a response, or describe a failed line.
    fn report(&self, status: i32) {
        match status {
            STATUS_OK => self.output(LINE_END),
            STATUS_UNKNOWN_COMMAND => self.output("UNKNOWN COMMAND\r\n"),
            STATUS_OVERFLOW => self.output("LINE TOO LONG\r\n"),
            _ => self.output("COMMAND FAILED\r\n"),
        }
    }

    fn reset_buffer(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    fn output(&self, text: &str) {
        if let Some(output_fn) = self.output_fn {
            output_fn(text);
        }
    }
}
