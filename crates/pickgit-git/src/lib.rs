//! Git integration for pick-git.
//!
//! This crate wraps `git` subprocess invocation behind the [`Git`] trait
//! and builds the read-only commands that list branches, tags, commits,
//! reflog entries and files for the selector.

pub mod commands;
pub mod gitdir;
pub mod listers;

pub use commands::{Git, GitCli, GitError, Result};
