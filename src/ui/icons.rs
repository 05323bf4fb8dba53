//! Status vocabulary for consistent CLI output.

use super::theme::CheckerTheme;

/// Canonical status kinds used across all checker output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check or file passed.
    Passed,
    /// Check or file failed.
    Failed,
}

impl StatusKind {
    /// Map a boolean pass flag.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Passed => "✓",
            Self::Failed => "✗",
        }
    }

    /// Word shown next to the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }

    /// Style matching this status.
    pub fn style(self, theme: &CheckerTheme) -> &console::Style {
        match self {
            Self::Passed => &theme.success,
            Self::Failed => &theme.error,
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &CheckerTheme) -> String {
        self.style(theme).apply_to(self.icon()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_passed_maps_flag() {
        assert_eq!(StatusKind::from_passed(true), StatusKind::Passed);
        assert_eq!(StatusKind::from_passed(false), StatusKind::Failed);
    }

    #[test]
    fn icons_and_labels() {
        assert_eq!(StatusKind::Passed.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Passed.label(), "Passed");
        assert_eq!(StatusKind::Failed.label(), "Failed");
    }

    #[test]
    fn plain_styled_icon_is_bare() {
        let theme = CheckerTheme::plain();
        assert_eq!(StatusKind::Failed.styled(&theme), "✗");
    }
}
