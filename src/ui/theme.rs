//! Visual theme and styling.

use console::Style;

/// Report styling.
#[derive(Debug, Clone)]
pub struct AuditTheme {
    /// Style for found topics and passing summaries (green).
    pub success: Style,
    /// Style for unreadable files (orange).
    pub warning: Style,
    /// Style for missing topics and failing summaries (red bold).
    pub error: Style,
    /// Style for file headers (bold).
    pub header: Style,
}

impl Default for AuditTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick the coloured or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    if no_color_requested(std::env::var("NO_COLOR").ok().as_deref()) {
        return false;
    }

    console::Term::stdout().is_term()
}

/// Only a non-empty `NO_COLOR` disables color (https://no-color.org/).
fn no_color_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
