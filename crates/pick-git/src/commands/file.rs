//! `file` and `file_commit`.
//!
//! Both run from the repository root: git reports paths relative to it.

use anyhow::Result;
use tracing::debug;

use super::{Outcome, git_subcommand, picked, select_and_dispatch};
use crate::context::RuntimeContext;
use crate::session::Session;

/// Pick modified file(s), staged ones with `--staged`, then copy or run
/// the template.
pub fn run(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    let staged = ctx.pick.staged;
    select_and_dispatch(ctx, session, |s| s.pick_modified_file(staged, &[]))
}

/// Pick a tracked file, then a commit that touched it, and show or diff
/// the file at that commit.
///
/// The file name at the commit is picked from the files it modified; if
/// that pick is cancelled the tracked file name is used for both sides.
pub fn run_file_commit(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    let file = picked!(session.pick_file()?);
    session.copy(file.as_str());

    let commit = picked!(session.pick_commit(&["--follow", "--", file.as_str()])?);
    let other = session
        .pick_modified_file(false, &[commit.as_str()])?
        .unwrap_or(file.clone());
    debug!(%file, %commit, %other, "file history resolved");

    let command = if ctx.pick.show {
        git_subcommand("show", ctx, [format!("{commit}:{file}")])
    } else {
        git_subcommand(
            "diff",
            ctx,
            [
                "-M25".to_string(),
                commit.into_string(),
                "--".to_string(),
                file.into_string(),
                other.into_string(),
            ],
        )
    };
    session.execute(&command)?;
    Ok(Outcome::Completed)
}
