//! Color utilities for terminal output

use std::env;
use std::io::IsTerminal;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";

    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";

    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    paint(text, color, supports_formatting())
}

fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Terminal capability detection for stdout
pub fn supports_formatting() -> bool {
    formatting_enabled(
        env::var_os("NO_COLOR").is_some(),
        env::var("FORCE_COLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
        env::var("TERM").ok().as_deref(),
    )
}

fn formatting_enabled(
    no_color: bool,
    force_color: Option<&str>,
    is_terminal: bool,
    term: Option<&str>,
) -> bool {
    // Check if colors are explicitly disabled
    if no_color || force_color == Some("0") {
        return false;
    }

    // Force enable if explicitly requested
    if force_color.is_some() {
        return true;
    }

    // Check if output is being redirected
    if !is_terminal {
        return false;
    }

    !matches!(term, None | Some("") | Some("dumb"))
}
