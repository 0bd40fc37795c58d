//! Per-invocation pick state.

/// Flags that shape one invocation of a Selection Function or Composite
/// Operation. Built once from the command line and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickContext {
    /// Pick two entities instead of comparing one against the current or
    /// default entity.
    pub both: bool,
    /// `git show` the picked file instead of diffing it.
    pub show: bool,
    /// Limit modified files to changes staged for commit.
    pub staged: bool,
    /// List commits in both directions instead of only counting them.
    pub detailed: bool,
}

impl PickContext {
    /// How many entities a selection function picks in this context.
    pub fn pick_count(&self) -> usize {
        if self.both { 2 } else { 1 }
    }
}
