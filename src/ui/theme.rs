//! Visual theme and styling.

use console::Style;

/// The checker's visual theme.
#[derive(Debug, Clone)]
pub struct CheckerTheme {
    /// Style for passing results (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for failing results and errors (red bold).
    pub error: Style,
    /// Style for informational/running elements (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for section headings (bold underlined).
    pub heading: Style,
    /// Style for the banner (blue bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for loading placeholder bars (dim).
    pub skeleton: Style,
}

impl Default for CheckerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckerTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            heading: Style::new().bold().underlined(),
            header: Style::new().bold().blue(),
            border: Style::new().dim(),
            key: Style::new().bold(),
            skeleton: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            heading: Style::new(),
            header: Style::new(),
            border: Style::new(),
            key: Style::new(),
            skeleton: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_warning() {
        let theme = CheckerTheme::plain();
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = CheckerTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let theme = CheckerTheme::plain();
        let msg = theme.format_header("Code Checker");
        assert!(msg.contains("Code Checker"));
        assert!(msg.contains("◆"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = CheckerTheme::default();
        let new = CheckerTheme::new();
        assert_eq!(default.format_error("test"), new.format_error("test"));
    }

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = CheckerTheme::plain();
        assert_eq!(theme.skeleton.apply_to("░░░").to_string(), "░░░");
        assert_eq!(theme.heading.apply_to("Results").to_string(), "Results");
    }
}
