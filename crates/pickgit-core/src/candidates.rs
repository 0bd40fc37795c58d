//! Candidate Lists: the line-oriented text piped into the selector.

/// An ordered list of candidate lines produced by a git subcommand.
///
/// The text always ends with a newline unless it is empty, because the
/// selector reads newline-delimited standard input and some git commands
/// (`git log --pretty=format:...`) omit the final newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    text: String,
}

impl CandidateList {
    /// Wrap raw git output, normalizing the trailing newline.
    pub fn from_output(raw: impl Into<String>) -> Self {
        let mut text = raw.into();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        Self { text }
    }

    /// Returns the normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the normalized text as bytes, ready to be written to a pipe.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Iterates over the candidate lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Returns the number of candidate lines.
    pub fn len(&self) -> usize {
        self.text.lines().count()
    }

    /// Returns `true` when git produced no candidates.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
