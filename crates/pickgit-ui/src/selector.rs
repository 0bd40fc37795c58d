//! The external fuzzy selector.
//!
//! Candidates are piped into the selector's standard input; the line the
//! user chooses comes back on its standard output. The selector draws its
//! interface on the controlling terminal, so stderr is inherited.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use pickgit_core::candidates::CandidateList;
use thiserror::Error;
use tracing::debug;

use crate::interrupt;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running the selector.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The selector program is not on `PATH`.
    #[error("{program} isn't installed! exiting...")]
    NotInstalled {
        /// The program that was looked up.
        program: String,
    },

    /// The selector command line was empty.
    #[error("no selector command configured")]
    EmptyCommand,

    /// The selector could not be spawned or waited on.
    #[error("failed to run selector `{program}`: {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for selector operations.
pub type Result<T> = std::result::Result<T, SelectError>;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Something that lets the user choose one line out of a candidate list.
pub trait Select {
    /// Present `candidates` and return the raw selected output.
    ///
    /// Returns `Ok(None)` when the user aborted: the selector printed
    /// nothing, or an interrupt arrived while it was running.
    fn select(&self, candidates: &CandidateList) -> Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// External process
// ---------------------------------------------------------------------------

/// A selector run as a child process, e.g. `fzf` or `pick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSelector {
    program: String,
    args: Vec<String>,
}

impl ExternalSelector {
    /// Parse a selector command line such as `fzf --height 40%`.
    ///
    /// The line is split on whitespace; quoting is not interpreted.
    pub fn from_command_line(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(SelectError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Returns the program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the extra arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Check that the program can be found on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NotInstalled`] if it cannot.
    pub fn ensure_installed(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|_| SelectError::NotInstalled {
            program: self.program.clone(),
        })
    }
}

impl Select for ExternalSelector {
    fn select(&self, candidates: &CandidateList) -> Result<Option<String>> {
        // An interrupt that landed while git was listing cancels this pick.
        if interrupt::take() {
            debug!("interrupted before selector start");
            return Ok(None);
        }
        debug!(
            program = %self.program,
            candidates = candidates.len(),
            "running selector"
        );

        let spawn_error = |source: std::io::Error| SelectError::SpawnError {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(spawn_error)?;

        // Feed stdin from a second thread while stdout is drained here, so a
        // selector that writes before reading all input cannot fill both
        // pipes and stall.
        let stdin = child.stdin.take();
        let output = std::thread::scope(|scope| {
            if let Some(mut stdin) = stdin {
                scope.spawn(move || {
                    // Broken pipe: the selector exited before reading everything.
                    let _ = stdin.write_all(candidates.as_bytes());
                    // Dropping stdin signals EOF to the selector.
                });
            }
            child.wait_with_output()
        })
        .map_err(spawn_error)?;
        let interrupted = interrupt::take();
        let selected = String::from_utf8_lossy(&output.stdout).into_owned();

        if interrupted || selected.trim().is_empty() {
            debug!(interrupted, code = ?output.status.code(), "selection cancelled");
            return Ok(None);
        }

        Ok(Some(selected))
    }
}
