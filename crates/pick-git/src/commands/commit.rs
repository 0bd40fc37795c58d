//! `commit`, `commit_reflog`, `commit_file` and `commit_reflog_file`.

use anyhow::Result;

use super::{Outcome, pick_file_between, select_and_dispatch};
use crate::context::RuntimeContext;
use crate::session::Session;

/// Pick commit(s) from the log, then copy or run the template.
pub fn run(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    select_and_dispatch(ctx, session, |s| s.pick_commit(&[]))
}

/// Pick commit(s) from the reflog, then copy or run the template.
pub fn run_reflog(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    let all = ctx.reflog_all;
    select_and_dispatch(ctx, session, |s| s.pick_commit_reflog(all))
}

pub fn run_file(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    pick_file_between(ctx, session, |s| s.pick_commit(&[]))
}

pub fn run_reflog_file(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    let all = ctx.reflog_all;
    pick_file_between(ctx, session, |s| s.pick_commit_reflog(all))
}
