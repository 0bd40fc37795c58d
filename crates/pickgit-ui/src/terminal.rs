//! Terminal detection utilities.

use std::env;

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns `true` if stderr is connected to a terminal (TTY).
pub fn is_stderr_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stderr())
}

/// Determines if ANSI color codes should be used.
///
/// Respects standard conventions:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    color_allowed(is_tty())
}

/// Same as [`supports_color`], but for output written to stderr.
pub fn stderr_supports_color() -> bool {
    color_allowed(is_stderr_tty())
}

fn color_allowed(tty: bool) -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }
    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }
    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }
    tty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tty_detection_does_not_panic() {
        let _ = is_tty();
        let _ = is_stderr_tty();
    }

    #[test]
    fn color_follows_tty_without_overrides() {
        // Only meaningful when none of the override variables are set.
        if env::var_os("NO_COLOR").is_none()
            && env::var_os("CLICOLOR").is_none()
            && env::var_os("CLICOLOR_FORCE").is_none()
            && env::var("TERM").as_deref() != Ok("dumb")
        {
            assert!(color_allowed(true));
            assert!(!color_allowed(false));
        }
    }
}
