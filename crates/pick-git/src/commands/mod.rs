//! Operation handlers, one module per entity family.
//!
//! [`run`] is the Dispatcher: it maps the validated [`Function`] to its
//! handler. Handlers return [`Outcome::Cancelled`] as soon as any pick is
//! aborted, before anything is copied or executed.

pub mod branch;
pub mod commit;
pub mod completion;
pub mod file;
pub mod tag;

use anyhow::Result;
use pickgit_core::function::Function;
use pickgit_core::template::ShellCommand;
use pickgit_core::token::{PickOutcome, SelectionToken, join_tokens};
use tracing::debug;

use crate::context::RuntimeContext;
use crate::session::Session;

/// How an operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// A pick was aborted. Not an error; the process exits cleanly.
    Cancelled,
}

/// Unwrap a [`PickOutcome`], returning `Ok(Outcome::Cancelled)` from the
/// enclosing function when the pick was cancelled.
macro_rules! picked {
    ($outcome:expr) => {
        match $outcome {
            pickgit_core::token::PickOutcome::Picked(token) => token,
            pickgit_core::token::PickOutcome::Cancelled => {
                return Ok($crate::commands::Outcome::Cancelled);
            }
        }
    };
}
pub(crate) use picked;

/// Run the operation named by `ctx.function`.
pub fn run(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    if ctx.function.needs_repository_root() && !session.enter_repository_root()? {
        return Ok(Outcome::Cancelled);
    }
    debug!(function = %ctx.function, pick = ?ctx.pick, "dispatching");

    match ctx.function {
        Function::Branch => branch::run(ctx, session),
        Function::Tag => tag::run(ctx, session),
        Function::Commit => commit::run(ctx, session),
        Function::CommitReflog => commit::run_reflog(ctx, session),
        Function::File => file::run(ctx, session),
        Function::BranchFile => branch::run_file(ctx, session),
        Function::CommitFile => commit::run_file(ctx, session),
        Function::CommitReflogFile => commit::run_reflog_file(ctx, session),
        Function::BranchCompare => branch::run_compare(ctx, session),
        Function::FileCommit => file::run_file_commit(ctx, session),
    }
}

/// Pick one entity, or two in both-mode, with `pick`.
///
/// Returns `None` if any of the picks is cancelled.
pub(crate) fn pick_tokens<F>(ctx: &RuntimeContext, mut pick: F) -> Result<Option<Vec<SelectionToken>>>
where
    F: FnMut() -> Result<PickOutcome>,
{
    let mut tokens = Vec::with_capacity(ctx.pick.pick_count());
    for _ in 0..ctx.pick.pick_count() {
        match pick()? {
            PickOutcome::Picked(token) => tokens.push(token),
            PickOutcome::Cancelled => return Ok(None),
        }
    }
    Ok(Some(tokens))
}

/// Copy the tokens when no command template was given, otherwise append
/// them to the template and execute the result.
pub(crate) fn dispatch(
    ctx: &RuntimeContext,
    session: &mut Session<'_>,
    tokens: &[SelectionToken],
) -> Result<Outcome> {
    if ctx.template.is_empty() {
        session.copy(&join_tokens(tokens, &ctx.copy_separator));
    } else {
        session.execute(&ctx.template.with_tokens(tokens))?;
    }
    Ok(Outcome::Completed)
}

/// Run a plain selection function: pick, then [`dispatch`].
pub(crate) fn select_and_dispatch<F>(
    ctx: &RuntimeContext,
    session: &mut Session<'_>,
    pick: F,
) -> Result<Outcome>
where
    F: Fn(&Session<'_>) -> Result<PickOutcome>,
{
    let Some(tokens) = pick_tokens(ctx, || pick(&*session))? else {
        return Ok(Outcome::Cancelled);
    };
    dispatch(ctx, session, &tokens)
}

/// Shared tail of `branch_file`, `commit_file` and `commit_reflog_file`.
///
/// Picks the entity (and the comparison entity in both-mode, `HEAD`
/// otherwise), then a file modified between the two. The file path is
/// copied, and the file is shown at the first entity or diffed between
/// both.
pub(crate) fn pick_file_between<F>(
    ctx: &RuntimeContext,
    session: &mut Session<'_>,
    pick: F,
) -> Result<Outcome>
where
    F: Fn(&Session<'_>) -> Result<PickOutcome>,
{
    let from = picked!(pick(&*session)?);
    let to = if ctx.pick.both {
        picked!(pick(&*session)?).into_string()
    } else {
        "HEAD".to_string()
    };

    let file = picked!(session.pick_modified_file(false, &[from.as_str(), to.as_str()])?);
    session.copy(file.as_str());

    let command = if ctx.pick.show {
        git_subcommand("show", ctx, [format!("{from}:{file}")])
    } else {
        git_subcommand(
            "diff",
            ctx,
            [from.into_string(), to, "--".to_string(), file.into_string()],
        )
    };
    session.execute(&command)?;
    Ok(Outcome::Completed)
}

/// `git <subcommand> ARGS <rest...>`, with the trailing command-line
/// arguments passed through as extra git options.
pub(crate) fn git_subcommand<I>(
    subcommand: &str,
    ctx: &RuntimeContext,
    rest: I,
) -> ShellCommand
where
    I: IntoIterator<Item = String>,
{
    let words = ["git".to_string(), subcommand.to_string()]
        .into_iter()
        .chain(ctx.template.args().iter().cloned())
        .chain(rest);
    ShellCommand::words(words)
}
