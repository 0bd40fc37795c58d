//! `branch`, `branch_file` and `branch_compare`.

use anyhow::Result;
use pickgit_core::template::ShellCommand;
use tracing::info;

use super::{Outcome, pick_file_between, picked, select_and_dispatch};
use crate::context::RuntimeContext;
use crate::session::Session;

/// Pick branch(es), then copy or run the template.
pub fn run(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    select_and_dispatch(ctx, session, |s| s.pick_branch())
}

/// Pick a branch and a file it changes relative to `HEAD`.
pub fn run_file(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    pick_file_between(ctx, session, |s| s.pick_branch())
}

/// Compare the current branch (or a second pick) with a picked branch.
///
/// `that` is always picked. In both-mode `this` is picked first; otherwise
/// it is the checked-out branch.
pub fn run_compare(ctx: &RuntimeContext, session: &mut Session<'_>) -> Result<Outcome> {
    let this = if ctx.pick.both {
        picked!(session.pick_branch()?).into_string()
    } else {
        match session.current_branch()? {
            Some(branch) => branch,
            None => return Ok(Outcome::Cancelled),
        }
    };
    let that = picked!(session.pick_branch()?).into_string();
    info!(%this, %that, detailed = ctx.pick.detailed, "comparing branches");

    session.execute(&compare_command(&this, &that, ctx.pick.detailed))?;
    Ok(Outcome::Completed)
}

/// The command comparing `this` with `that`.
///
/// Detailed mode lists the commits of each side; otherwise only the
/// left/right counts are printed.
pub fn compare_command(this: &str, that: &str, detailed: bool) -> ShellCommand {
    if detailed {
        ShellCommand::Literal(format!(
            "git log --stat {that}..{this} && git log --stat {this}..{that}"
        ))
    } else {
        ShellCommand::words([
            "git".to_string(),
            "rev-list".to_string(),
            "--left-right".to_string(),
            "--count".to_string(),
            format!("{this}...{that}"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Choice, Harness, lock_interrupt_flag};
    use pretty_assertions::assert_eq;

    const BRANCHES: &str = "* trunk\n  feature/login\n  remotes/origin/HEAD -> origin/trunk\n  remotes/origin/trunk\n";

    fn harness() -> Harness {
        Harness::new()
            .git("branch -a", BRANCHES)
            .git("rev-parse --abbrev-ref HEAD", "trunk\n")
    }

    #[test]
    fn compare_counts_against_current_branch() {
        let mut h = harness().choose([Choice::Line("login")]);
        let outcome = h.run(&["-f", "branch_compare"]).unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(h.executed(), vec!["git rev-list --left-right --count trunk...feature/login"]);
        assert!(h.copied().is_empty());
    }

    #[test]
    fn compare_detailed_lists_both_directions() {
        let mut h = harness().choose([Choice::Line("login")]);
        h.run(&["-f", "branch_compare", "-d"]).unwrap();

        assert_eq!(
            h.executed(),
            vec!["git log --stat feature/login..trunk && git log --stat trunk..feature/login"]
        );
    }

    #[test]
    fn compare_both_picks_this_then_that() {
        let mut h = harness().choose([Choice::Line("origin/trunk"), Choice::Line("login")]);
        h.run(&["-f", "branch_compare", "-b"]).unwrap();

        insta::assert_snapshot!(h.executed().join("\n"), @"git rev-list --left-right --count origin/trunk...feature/login");
    }

    #[test]
    fn compare_ignores_template() {
        let mut h = harness().choose([Choice::Line("login")]);
        h.run(&["-f", "branch_compare", "echo", "hi"]).unwrap();
        assert_eq!(h.executed(), vec!["git rev-list --left-right --count trunk...feature/login"]);
    }

    #[test]
    fn compare_cancel_has_no_effect() {
        let mut h = harness().choose([Choice::Cancel]);
        assert_eq!(h.run(&["-f", "branch_compare"]).unwrap(), Outcome::Cancelled);
        assert!(h.executed().is_empty());
        assert!(h.copied().is_empty());
    }

    #[test]
    fn branch_copies_without_template() {
        let mut h = harness().choose([Choice::Line("login")]);
        h.run(&["-f", "branch"]).unwrap();
        assert_eq!(h.copied(), vec!["feature/login"]);
        assert!(h.executed().is_empty());
    }

    #[test]
    fn branch_runs_template_with_token() {
        let mut h = harness().choose([Choice::Line("login")]);
        h.run(&["-f", "branch", "git", "checkout"]).unwrap();
        assert_eq!(h.executed(), vec!["git checkout feature/login"]);
        assert!(h.copied().is_empty());
    }

    #[test]
    fn branch_remote_head_resolves_target() {
        let mut h = harness().choose([Choice::Line("HEAD ->")]);
        h.run(&["-f", "branch"]).unwrap();
        assert_eq!(h.copied(), vec!["origin/trunk"]);
    }

    #[test]
    fn branch_both_joins_tokens_in_order() {
        let mut h = harness().choose([Choice::Line("login"), Choice::Line("* trunk")]);
        h.run(&["-f", "branch", "-b"]).unwrap();
        assert_eq!(h.copied(), vec!["feature/login trunk"]);
    }

    #[test]
    fn branch_file_diffs_against_head() {
        let mut h = harness()
            .git("rev-parse --show-toplevel", "/repo\n")
            .git("diff --name-only feature/login HEAD", "src/login.rs\nREADME.md\n")
            .choose([Choice::Line("login"), Choice::Line("login.rs")]);
        h.run(&["-f", "branch_file"]).unwrap();

        assert_eq!(h.copied(), vec!["src/login.rs"]);
        assert_eq!(h.executed(), vec!["git diff feature/login HEAD -- src/login.rs"]);
    }

    #[test]
    fn compare_interrupted_branch_lookup_cancels() {
        let _flag = lock_interrupt_flag();
        let mut h = Harness::new()
            .git("branch -a", BRANCHES)
            .interrupt_on("rev-parse --abbrev-ref HEAD")
            .choose([]);

        assert_eq!(h.run(&["-f", "branch_compare"]).unwrap(), Outcome::Cancelled);
        assert!(h.executed().is_empty());
    }
}
