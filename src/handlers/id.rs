//! Identity handler for the `id` command.
//!
//! Answers `ID: <identity>` with the identity from [`Config`](crate::config::Config).
//! The argument is never inspected, so `id`, `ID now` and `id 0x10` all give
//! the same answer.

use super::{push_response, Context};
use crate::command::{Command, Line};
use crate::error::Error;

/// Handler for the `id` command. Any argument is ignored.
pub fn handle(ctx: &Context<'_>, _cmd: &Command, out: &mut Line) -> Result<(), Error> {
    push_response(out, "ID: ")?;
    push_response(out, &ctx.config.identity)
}
