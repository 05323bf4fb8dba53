//! Checker view state machine.

use crate::client::{CheckClient, CheckRequest};
use crate::error::{CheckerError, Result};
use crate::report::CheckResult;
use crate::ui::{CheckerTheme, UserInterface};

use super::render::{render, render_summary, LOADING_TITLE};

/// Lifecycle of the view.
///
/// A result and an error can never coexist, and `Loading` holds only
/// between [`CheckerView::begin`] and [`CheckerView::settle`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request returned a report.
    Succeeded(CheckResult),
    /// The last request failed with this message.
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether a submission has completed, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    pub fn result(&self) -> Option<&CheckResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The checker view: form input, one request, and its rendered outcome.
#[derive(Debug, Default)]
pub struct CheckerView {
    state: ViewState,
    repo_url: Option<String>,
}

impl CheckerView {
    /// Create an idle view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The most recently submitted repository URL.
    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    /// Whether the URL field and submit control accept input.
    pub fn controls_enabled(&self) -> bool {
        !self.state.is_loading()
    }

    /// Start a submission and enter `Loading`.
    ///
    /// Rejects empty input and submissions while another is loading,
    /// leaving the state untouched in both cases. Prior results and
    /// errors are dropped on success.
    pub fn begin(&mut self, repo_url: &str) -> Result<CheckRequest> {
        if !self.controls_enabled() {
            return Err(CheckerError::SubmissionInFlight);
        }

        if repo_url.trim().is_empty() {
            return Err(CheckerError::Validation {
                message: "Repository URL is required".to_string(),
            });
        }

        self.state = ViewState::Loading;
        self.repo_url = Some(repo_url.to_string());
        Ok(CheckRequest::new(repo_url))
    }

    /// Leave `Loading` with the outcome of the request.
    pub fn settle(&mut self, outcome: Result<CheckResult>) -> &ViewState {
        debug_assert!(self.state.is_loading(), "settle without a submission");

        self.state = match outcome {
            Ok(result) => {
                tracing::debug!(
                    "Check settled: {} files, {} passed",
                    result.details.len(),
                    result.passed_files()
                );
                ViewState::Succeeded(result)
            }
            Err(e) => {
                tracing::warn!("Check failed: {}", e);
                ViewState::Failed(e.to_string())
            }
        };

        &self.state
    }

    /// Submit a repository URL and wait for the outcome.
    ///
    /// Shows the loading skeleton while the request is in flight and
    /// clears it before settling. Only `Validation` and
    /// `SubmissionInFlight` are returned as errors; request failures
    /// settle into [`ViewState::Failed`].
    pub fn submit(
        &mut self,
        repo_url: &str,
        client: &dyn CheckClient,
        ui: &mut dyn UserInterface,
    ) -> Result<&ViewState> {
        let request = self.begin(repo_url)?;

        let mut spinner = ui.start_spinner(LOADING_TITLE);
        spinner.set_message(&render(&self.state, &ui.theme()).join("\n"));

        let outcome = client.check(&request);
        spinner.finish_clear();

        Ok(self.settle(outcome))
    }

    /// Render the current state.
    pub fn render(&self, theme: &CheckerTheme) -> Vec<String> {
        render(&self.state, theme)
    }

    /// Print the current state through the UI.
    ///
    /// Output modes that hide details print only the summary block of a
    /// successful check.
    pub fn show(&self, ui: &mut dyn UserInterface) {
        let theme = ui.theme();
        let lines = match self.state.result() {
            Some(result) if !ui.output_mode().shows_details() => render_summary(result, &theme),
            _ => self.render(&theme),
        };

        for line in lines {
            ui.message(&line);
        }
    }
}
