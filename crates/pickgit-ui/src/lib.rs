//! Terminal collaborators for pick-git.
//!
//! Provides the external fuzzy selector, the clipboard capability, the
//! interrupt flag shared with the Ctrl+C handler, and colour styling for
//! echoed commands and error messages.

pub mod clipboard;
pub mod interrupt;
pub mod selector;
pub mod styles;
pub mod terminal;
