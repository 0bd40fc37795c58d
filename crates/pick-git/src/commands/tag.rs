//! `tag`.

use anyhow::Result;

use super::{Outcome, select_and_dispatch};
use crate::context::RuntimeContext;
use crate::session::Session;

/// Pick tag(s), then copy or run the template.
pub fn run(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    select_and_dispatch(ctx, session, |s| s.pick_tag())
}
