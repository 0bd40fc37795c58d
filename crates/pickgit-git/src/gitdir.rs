//! Repository root and HEAD discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commands::{Git, GitError, Result, git_value};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Get the repository root using `git rev-parse --show-toplevel`.
///
/// This respects worktrees and submodules.
///
/// # Errors
///
/// Returns [`GitError::NotARepo`] when `cwd` is not inside a repository, or
/// any other [`GitError`] if git could not be run.
pub fn repository_root(git: &dyn Git, cwd: &Path) -> Result<PathBuf> {
    match git_value(git, &["rev-parse", "--show-toplevel"], cwd) {
        Ok(output) => {
            let root = PathBuf::from(normalize_git_path(&output));
            debug!(root = %root.display(), "resolved repository root");
            Ok(root)
        }
        Err(GitError::CommandFailed { stderr, .. }) if stderr.contains("not a git repository") => {
            Err(GitError::NotARepo)
        }
        Err(e) => Err(e),
    }
}

/// Return the name of the currently checked-out branch.
///
/// On a detached HEAD git answers `HEAD`, which is still a valid revision.
pub fn current_branch(git: &dyn Git, cwd: &Path) -> Result<String> {
    git_value(git, &["rev-parse", "--abbrev-ref", "HEAD"], cwd)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Normalize git paths for Windows compatibility.
///
/// Git on Windows may return MSYS-style paths like `/c/Users/...` or forward-
/// slash paths like `C:/Users/...`. This function converts them to native
/// format.
fn normalize_git_path(path: &str) -> String {
    let path = path.trim();

    // On non-Windows, return as-is.
    if std::path::MAIN_SEPARATOR != '\\' {
        return path.to_string();
    }

    // Convert /c/Users/... to C:\Users\...
    if path.len() >= 3
        && path.as_bytes()[0] == b'/'
        && path.as_bytes()[2] == b'/'
        && path.as_bytes()[1].is_ascii_alphabetic()
    {
        let drive = path.as_bytes()[1].to_ascii_uppercase() as char;
        let rest = &path[2..];
        return format!("{drive}:{}", rest.replace('/', "\\"));
    }

    path.replace('/', "\\")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
