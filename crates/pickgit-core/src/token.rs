//! Selection Tokens and pick outcomes.

use std::fmt;

use crate::error::{CoreError, Result};

/// A string identifying one Git entity: a branch or tag name, an
/// abbreviated commit hash, or a repository-relative file path.
///
/// A token is never empty. An aborted pick is represented by
/// [`PickOutcome::Cancelled`], not by an empty token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionToken(String);

impl SelectionToken {
    /// Build a token, rejecting empty or all-whitespace input.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CoreError::EmptyToken);
        }
        Ok(Self(value))
    }

    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SelectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SelectionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of presenting a Candidate List to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user chose a line and a token was extracted from it.
    Picked(SelectionToken),
    /// The user aborted the selector, or it produced no output.
    Cancelled,
}

impl PickOutcome {
    /// Returns `true` for [`PickOutcome::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the picked token, or `None` if the pick was cancelled.
    pub fn token(self) -> Option<SelectionToken> {
        match self {
            Self::Picked(token) => Some(token),
            Self::Cancelled => None,
        }
    }

    /// Returns the picked token, or `fallback` if the pick was cancelled.
    pub fn unwrap_or(self, fallback: SelectionToken) -> SelectionToken {
        self.token().unwrap_or(fallback)
    }
}

impl From<Option<SelectionToken>> for PickOutcome {
    fn from(token: Option<SelectionToken>) -> Self {
        match token {
            Some(token) => Self::Picked(token),
            None => Self::Cancelled,
        }
    }
}

/// Join tokens with `separator`, in pick order.
pub fn join_tokens(tokens: &[SelectionToken], separator: &str) -> String {
    tokens
        .iter()
        .map(SelectionToken::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
