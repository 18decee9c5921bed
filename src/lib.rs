//! # serialcmd - Serial Control Channel Command Interpreter
//!
//! A small, allocation-free command interpreter for the serial control channel
//! of a microcontroller. One ASCII line goes in, one bounded human-readable
//! response comes out. The library is designed for embedded systems and
//! supports `no_std` environments.
//!
//! ## Commands
//!
//! | Command  | Argument              | Response                               |
//! |----------|-----------------------|----------------------------------------|
//! | `mac`    | ignored               | `MAC 24:0A:C4:00:00:01`                |
//! | `id`     | ignored               | `ID: <identity>`                       |
//! | `status` | ignored               | uptime, core count and free heap       |
//! | `dec`    | `0x..`, `0b..`, `0..` | decimal value or `ARGUMENT ERROR`      |
//!
//! Command words are case-insensitive.
//!
//! ## Status Codes
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! | `0`  | Response written                               |
//! | `-1` | Input or output buffer missing                 |
//! | `-2` | Input reached the line capacity                |
//! | `1`  | Unknown command                                |
//!
//! A malformed `dec` argument is *not* a failure: it is answered with the
//! text `ARGUMENT ERROR` and status `0`.
//!
//! ## Usage
//!
//! ```rust
//! use serialcmd::command::Line;
//! use serialcmd::config::Config;
//! use serialcmd::dispatch::Dispatcher;
//! use serialcmd::platform::{MacType, Platform};
//!
//! struct Board;
//!
//! impl Platform for Board {
//!     fn read_mac(&self, _kind: MacType) -> [u8; 6] {
//!         [0x24, 0x0A, 0xC4, 0x00, 0x00, 0x01]
//!     }
//!     fn uptime_seconds(&self) -> u64 {
//!         42
//!     }
//!     fn core_count(&self) -> u8 {
//!         2
//!     }
//!     fn free_heap_bytes(&self) -> u32 {
//!         262_144
//!     }
//! }
//!
//! let board = Board;
//! let dispatcher = Dispatcher::new(&board, Config::default());
//!
//! let mut out = Line::new();
//! let status = dispatcher.process_command(Some("Dec 0xFF"), Some(&mut out));
//! assert_eq!(status, 0);
//! assert_eq!(out.as_str(), "255");
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

/// Line tokenizer, command tokens and the static command table.
pub mod command;

/// Device configuration and its JSON loader.
pub mod config;

/// Byte-stream line assembly in front of the dispatcher.
pub mod console;

/// Dispatch of tokenized lines to handlers.
pub mod dispatch;

/// Error types and status codes.
pub mod error;

/// Handlers for the known commands.
pub mod handlers;

/// Hardware and system information sources.
pub mod platform;

pub use command::{Command, Line, Token, MAX_LINE};
pub use config::Config;
pub use dispatch::Dispatcher;
pub use error::Error;
pub use platform::{MacType, Platform};
