//! System status handler for the `status` command.
//!
//! All three readings come from the injected [`Platform`](crate::platform::Platform);
//! this module only fixes their labels and order.

use super::{Context, HANDLER_RESPONSE_OVERFLOW};
use crate::command::{Command, Line};
use crate::error::Error;
use core::fmt::Write;

/// Handler for the `status` command.
///
/// Produces three labelled lines in a fixed order:
///
/// ```text
/// SYSTEM_UPTIME: 42 S
/// AVAILABLE CORES: 2
/// AVAILABLE HEAP MEMORY: 262144
/// ```
///
/// Each of the first two lines carries a trailing space before the newline.
pub fn handle(ctx: &Context<'_>, _cmd: &Command, out: &mut Line) -> Result<(), Error> {
    let platform = ctx.platform;
    write!(
        out,
        "SYSTEM_UPTIME: {} S \nAVAILABLE CORES: {} \nAVAILABLE HEAP MEMORY: {}",
        platform.uptime_seconds(),
        platform.core_count(),
        platform.free_heap_bytes()
    )
    .map_err(|_| Error::Handler(HANDLER_RESPONSE_OVERFLOW))
}
