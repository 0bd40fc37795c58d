//! Git entity kinds and token extraction.
//!
//! Each kind of entity is listed by a different git subcommand, and each
//! listing format puts the interesting part of a line in a different place:
//!
//! - `git branch -a` prints `* main` or `  remotes/origin/x`: the name is the
//!   last field.
//! - `git log --pretty=format:"%h ..."` and `git reflog` print the short hash
//!   first.
//! - `git diff --name-only` and `git ls-tree --name-only` print one path per
//!   line.

use std::fmt;

use crate::token::{PickOutcome, SelectionToken};

// ---------------------------------------------------------------------------
// Entity kinds
// ---------------------------------------------------------------------------

/// The kind of Git entity a pick presents to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Local or remote branch.
    Branch,
    /// Local tag.
    Tag,
    /// Commit from `git log`.
    Commit,
    /// Commit from `git reflog`.
    ReflogCommit,
    /// File whose content differs between two points.
    ModifiedFile,
    /// File tracked on the current branch.
    TrackedFile,
}

impl EntityKind {
    /// Returns the rule used to cut a token out of a selected line.
    pub fn token_rule(self) -> TokenRule {
        match self {
            Self::Branch | Self::Tag => TokenRule::LastField,
            Self::Commit | Self::ReflogCommit => TokenRule::FirstField,
            Self::ModifiedFile | Self::TrackedFile => TokenRule::WholeLine,
        }
    }

    /// Returns a short lowercase name, used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Tag => "tag",
            Self::Commit => "commit",
            Self::ReflogCommit => "reflog commit",
            Self::ModifiedFile => "modified file",
            Self::TrackedFile => "tracked file",
        }
    }

    /// Parse the selector's raw output into a [`PickOutcome`].
    pub fn parse_selection(self, selected: &str) -> PickOutcome {
        extract_token(selected, self.token_rule()).into()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Token extraction
// ---------------------------------------------------------------------------

/// Where the Selection Token sits inside a selected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRule {
    /// The last whitespace-delimited field.
    LastField,
    /// The first whitespace-delimited field.
    FirstField,
    /// The whole line, surrounding whitespace stripped.
    WholeLine,
}

/// Extract a token from the selector's output.
///
/// Only the first non-blank line is considered. Returns `None` when the
/// output holds nothing but whitespace, which callers treat as a
/// cancelled pick.
pub fn extract_token(selected: &str, rule: TokenRule) -> Option<SelectionToken> {
    let line = selected.lines().find(|l| !l.trim().is_empty())?;

    let value = match rule {
        TokenRule::LastField => line.split_whitespace().next_back()?,
        TokenRule::FirstField => line.split_whitespace().next()?,
        TokenRule::WholeLine => line.trim(),
    };

    SelectionToken::new(value).ok()
}
