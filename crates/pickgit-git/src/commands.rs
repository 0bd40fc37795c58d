//! Git command execution wrappers.
//!
//! Provides a thin wrapper around `git` subprocess invocation so that the
//! rest of the codebase does not need to deal with `std::process::Command`
//! directly. Callers go through the [`Git`] trait so tests can substitute
//! canned output.

use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running git commands.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute git: {0}")]
    SpawnError(#[from] std::io::Error),

    /// The git command exited with a non-zero status.
    #[error("`git {args}` failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The arguments git was invoked with, space-joined.
        args: String,
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },

    /// Not inside a git repository.
    #[error("not a git repository (or any of the parent directories)")]
    NotARepo,
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Something that can answer git commands.
///
/// The production implementation is [`GitCli`]; tests provide canned
/// output keyed by arguments.
pub trait Git {
    /// Run `git <args>` in `cwd` and return its standard output unmodified.
    ///
    /// A non-zero exit status is an error; no partial output is returned.
    fn output(&self, args: &[String], cwd: &Path) -> Result<String>;
}

/// Runs the `git` binary found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl Git for GitCli {
    fn output(&self, args: &[String], cwd: &Path) -> Result<String> {
        git_output(args, cwd)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Execute a `git` command with the given arguments and working directory.
///
/// Returns the contents of stdout exactly as git wrote them, so that
/// line-oriented listings keep their layout.
///
/// # Errors
///
/// Returns [`GitError::SpawnError`] if `git` cannot be found, or
/// [`GitError::CommandFailed`] if the command exits with a non-zero status.
///
/// # Examples
///
/// ```no_run
/// use pickgit_git::commands::git_output;
/// use std::path::Path;
///
/// let tags = git_output(&["tag", "-l"], Path::new(".")).unwrap();
/// print!("{tags}");
/// ```
pub fn git_output<S: AsRef<str>>(args: &[S], cwd: &Path) -> Result<String> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    debug!(?args, cwd = %cwd.display(), "running git");

    let output = Command::new("git").args(&args).current_dir(cwd).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(code = ?output.status.code(), %stderr, "git failed");
        return Err(GitError::CommandFailed {
            args: args.join(" "),
            code: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Like [`Git::output`], but with surrounding whitespace trimmed.
///
/// Used for single-value queries such as `rev-parse`.
pub fn git_value(git: &dyn Git, args: &[&str], cwd: &Path) -> Result<String> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    Ok(git.output(&args, cwd)?.trim().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_output_version() {
        // `git --version` should succeed on any system with git installed.
        let result = git_output(&["--version"], Path::new("."));
        assert!(result.is_ok(), "git --version failed: {result:?}");
        let output = result.unwrap();
        assert!(output.starts_with("git version"), "unexpected output: {output}");
        assert!(output.ends_with('\n'), "raw output should keep its newline");
    }

    #[test]
    fn test_git_value_trims() {
        let output = git_value(&GitCli, &["--version"], Path::new(".")).unwrap();
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_git_output_failure() {
        // An invalid git subcommand should fail.
        let result = git_output(&["not-a-real-subcommand"], Path::new("."));
        match result.unwrap_err() {
            GitError::CommandFailed { args, code, stderr } => {
                assert_eq!(args, "not-a-real-subcommand");
                assert!(code.is_some());
                assert!(!stderr.is_empty());
            }
            other => panic!("expected CommandFailed, got: {other:?}"),
        }
    }

    #[test]
    fn test_git_output_bad_cwd() {
        // Running git in a nonexistent directory should fail.
        let result = git_output(&["status"], Path::new("/nonexistent/directory/xyz"));
        assert!(matches!(result, Err(GitError::SpawnError(_))));
    }
}
