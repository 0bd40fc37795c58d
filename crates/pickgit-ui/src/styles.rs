//! Ayu color styling for echoed commands and error messages.
//!
//! Color source: <https://github.com/ayu-theme/ayu-colors>

use owo_colors::OwoColorize;

use crate::terminal::{stderr_supports_color, supports_color};

const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

fn paint(s: &str, rgb: (u8, u8, u8), bold: bool, enabled: bool) -> String {
    match (enabled, bold) {
        (false, _) => s.to_string(),
        (true, false) => s.truecolor(rgb.0, rgb.1, rgb.2).to_string(),
        (true, true) => s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string(),
    }
}

/// Renders a command line that is about to be executed (stdout).
pub fn render_command(s: &str) -> String {
    paint(s, ACCENT, true, supports_color())
}

/// Renders an error (stderr).
pub fn render_fail(s: &str) -> String {
    paint(s, FAIL, true, stderr_supports_color())
}
