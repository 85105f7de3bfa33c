//! Visual theme and styling.

use console::Style;

/// Preflight's visual theme.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Style for section banners (bold magenta).
    pub header: Style,
    /// Style for divider lines (dim).
    pub border: Style,
    /// Style for check labels (bold).
    pub key: Style,
    /// Style for check values (normal).
    pub value: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for error lines (red bold).
    pub error: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            key: Style::new().bold(),
            value: Style::new(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            border: Style::new(),
            key: Style::new(),
            value: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }
}

/// Determine whether colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
