//! ANSI color codes for tree and rule dumps.
//!
//! - Blue: node kinds and rule names
//! - Green: token values
//! - Dim: `@line:column` positions and flattened node text

/// Escape sequences wrapped around each colored part of a dump.
///
/// With [`Colors::OFF`] every field is empty, so printers write the same
/// format strings whether or not color is on. Standard 16-color codes only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    /// Palette for terminals.
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Plain output: every code is the empty string.
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    /// [`Colors::ON`] when `enabled`, otherwise [`Colors::OFF`].
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Whether this palette emits any escape codes.
    pub fn is_enabled(&self) -> bool {
        *self != Self::OFF
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}
