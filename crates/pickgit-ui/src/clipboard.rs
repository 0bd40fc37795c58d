//! Best-effort clipboard access.
//!
//! The clipboard is probed once at startup. When it works, copies go to
//! the system clipboard; otherwise every copy is a no-op and the selection
//! is only visible in the echoed command.

use std::fmt;

use tracing::debug;

/// Something that accepts copied text.
pub trait Clip {
    /// Copy `text`. Never fails: an unavailable clipboard drops the text.
    fn copy(&mut self, text: &str);
}

/// The system clipboard, or nothing.
pub enum Clipboard {
    /// A probed, working system clipboard.
    Working(arboard::Clipboard),
    /// Copies are discarded.
    Noop,
}

impl Clipboard {
    /// Open the system clipboard and check that it can be read.
    ///
    /// Returns [`Clipboard::Noop`] when `enabled` is false or when the
    /// platform clipboard is missing a backend (e.g. no display server).
    pub fn probe(enabled: bool) -> Self {
        if !enabled {
            debug!("clipboard disabled");
            return Self::Noop;
        }

        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                return Self::Noop;
            }
        };

        match clipboard.get_text() {
            // An empty or non-text clipboard is still a working one.
            Ok(_) | Err(arboard::Error::ContentNotAvailable) => {
                debug!("clipboard available");
                Self::Working(clipboard)
            }
            Err(e) => {
                debug!(error = %e, "clipboard probe failed");
                Self::Noop
            }
        }
    }

    /// Returns `true` for [`Clipboard::Working`].
    #[cfg(test)]
    fn is_working(&self) -> bool {
        matches!(self, Self::Working(_))
    }
}

impl Clip for Clipboard {
    fn copy(&mut self, text: &str) {
        match self {
            Self::Working(clipboard) => {
                if let Err(e) = clipboard.set_text(text.to_string()) {
                    debug!(error = %e, "clipboard write failed");
                } else {
                    debug!(%text, "copied to clipboard");
                }
            }
            Self::Noop => debug!(%text, "clipboard no-op"),
        }
    }
}

impl fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Working(_) => f.write_str("Clipboard::Working"),
            Self::Noop => f.write_str("Clipboard::Noop"),
        }
    }
}
