//! Process-wide interrupt flag.
//!
//! The Ctrl+C handler installed in `main` raises the flag; the selector
//! takes it after each run so that an interrupted pick is reported as
//! cancelled instead of killing the process mid-flow.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Raise the flag. Returns `true` if it was already raised.
pub fn raise() -> bool {
    INTERRUPTED.swap(true, Ordering::SeqCst)
}

/// Read and clear the flag.
pub fn take() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}
