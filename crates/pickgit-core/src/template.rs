//! Command templates and composed shell commands.

use std::fmt;

use crate::token::SelectionToken;

/// The trailing positional arguments given on the command line.
///
/// An empty template means "copy the selection"; a non-empty one is a
/// command that the Selection Token(s) are appended to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTemplate {
    args: Vec<String>,
}

impl CommandTemplate {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Append `tokens` to the template, in pick order.
    pub fn with_tokens(&self, tokens: &[SelectionToken]) -> ShellCommand {
        let words = self
            .args
            .iter()
            .cloned()
            .chain(tokens.iter().map(|t| t.as_str().to_string()))
            .collect();
        ShellCommand::Words(words)
    }
}

impl From<Vec<String>> for CommandTemplate {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}

/// A command ready to be handed to the Shell Executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// A complete command line, possibly using shell syntax such as `&&`.
    Literal(String),
    /// Words that are joined with single spaces.
    Words(Vec<String>),
}

impl ShellCommand {
    /// Build a [`ShellCommand::Words`] from anything string-like.
    pub fn words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Words(words.into_iter().map(Into::into).collect())
    }

    /// Returns the command line as the shell receives it.
    pub fn render(&self) -> String {
        match self {
            Self::Literal(line) => line.clone(),
            Self::Words(words) => words.join(" "),
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
