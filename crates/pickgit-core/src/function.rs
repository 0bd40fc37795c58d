//! The registry of operations that can be invoked by name.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Every operation reachable through `--function`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Branch,
    Tag,
    Commit,
    CommitReflog,
    File,
    BranchFile,
    CommitFile,
    CommitReflogFile,
    BranchCompare,
    FileCommit,
}

impl Function {
    /// All functions, in the order they are documented.
    pub const ALL: [Function; 10] = [
        Function::Branch,
        Function::Tag,
        Function::Commit,
        Function::CommitReflog,
        Function::File,
        Function::BranchFile,
        Function::CommitFile,
        Function::CommitReflogFile,
        Function::BranchCompare,
        Function::FileCommit,
    ];

    /// Returns the name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Tag => "tag",
            Self::Commit => "commit",
            Self::CommitReflog => "commit_reflog",
            Self::File => "file",
            Self::BranchFile => "branch_file",
            Self::CommitFile => "commit_file",
            Self::CommitReflogFile => "commit_reflog_file",
            Self::BranchCompare => "branch_compare",
            Self::FileCommit => "file_commit",
        }
    }

    /// One-line description shown in `--help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Branch => "pick branch(es), copy them or pass them to ARGS",
            Self::Tag => "pick tag(s), copy them or pass them to ARGS",
            Self::Commit => "pick commit hash(es), copy them or pass them to ARGS",
            Self::CommitReflog => "pick commit hash(es) from the reflog, copy them or pass them to ARGS",
            Self::File => "pick a modified (or --staged) file, copy it or pass it to ARGS",
            Self::BranchFile => "pick branch(es), then a file that differs, and diff or --show it",
            Self::CommitFile => "pick commit(s), then a file that differs, and diff or --show it",
            Self::CommitReflogFile => {
                "pick reflog commit(s), then a file that differs, and diff or --show it"
            }
            Self::BranchCompare => "count (or --detailed list) commits ahead of and behind a branch",
            Self::FileCommit => "pick a tracked file, then one of its commits, and diff or --show it",
        }
    }

    /// Returns `true` for operations that need the working directory to be
    /// the repository root because they handle root-relative paths.
    pub fn needs_repository_root(self) -> bool {
        matches!(
            self,
            Self::File | Self::BranchFile | Self::CommitFile | Self::CommitReflogFile | Self::FileCommit
        )
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| CoreError::UnknownFunction { name: s.to_string() })
    }
}

/// Names of all registered functions.
pub fn valid_function_names() -> Vec<&'static str> {
    Function::ALL.iter().map(|f| f.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_name_parses_back() {
        for function in Function::ALL {
            assert_eq!(function.name().parse::<Function>().unwrap(), function);
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "branches".parse::<Function>().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("'branches' is not a valid pick-git function"));
        assert!(message.contains("branch_compare"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Branch".parse::<Function>().is_err());
        assert!("".parse::<Function>().is_err());
    }

    #[test]
    fn root_relative_operations() {
        assert!(Function::FileCommit.needs_repository_root());
        assert!(Function::File.needs_repository_root());
        assert!(!Function::Branch.needs_repository_root());
        assert!(!Function::BranchCompare.needs_repository_root());
    }
}
