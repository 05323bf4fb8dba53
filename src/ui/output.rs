//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including request diagnostics.
    Verbose,
    /// Show the header, the loading spinner and the full report.
    #[default]
    Normal,
    /// Show only the outcome: the summary block or the error alert.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows request diagnostics (endpoint).
    pub fn shows_diagnostics(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the banner and the loading spinner.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode prints the per-file detailed results.
    pub fn shows_details(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
