//! Rendering of the checker view.
//!
//! Everything here is a pure function of [`ViewState`] and a theme and
//! returns the lines to print. Callers decide where the lines go.

use crate::report::{CheckDetail, CheckResult, FileResult};
use crate::ui::{Align, CheckerTheme, StatusKind, Table};

use super::state::ViewState;

/// Title shown above the loading skeleton.
pub const LOADING_TITLE: &str = "Checking...";

/// Width of a full skeleton bar, in columns.
const SKELETON_WIDTH: usize = 48;

/// Skeleton layout as (numerator, denominator, rows) of the full width.
const SKELETON_BARS: [(usize, usize, usize); 8] = [
    (3, 4, 1),
    (1, 2, 1),
    (2, 3, 1),
    (1, 3, 1),
    (1, 1, 4),
    (1, 2, 1),
    (2, 3, 1),
    (1, 3, 1),
];

const BOX_WIDTH: usize = 40;

/// Render the view for its current state.
///
/// At most one of skeleton, error alert and report is ever produced.
pub fn render(state: &ViewState, theme: &CheckerTheme) -> Vec<String> {
    match state {
        ViewState::Idle => Vec::new(),
        ViewState::Loading => render_skeleton(theme),
        ViewState::Failed(message) => render_alert(message, theme),
        ViewState::Succeeded(result) => render_result(result, theme),
    }
}

/// Static placeholder shown while a check is in flight.
pub fn render_skeleton(theme: &CheckerTheme) -> Vec<String> {
    let mut lines = vec![theme.info.apply_to(LOADING_TITLE).to_string()];
    for (num, den, rows) in SKELETON_BARS {
        let bar = "░".repeat(SKELETON_WIDTH * num / den);
        for _ in 0..rows {
            lines.push(theme.skeleton.apply_to(&bar).to_string());
        }
    }
    lines
}

/// Alert box holding an error message.
pub fn render_alert(message: &str, theme: &CheckerTheme) -> Vec<String> {
    let b = &theme.border;
    let mut lines = vec![format!(
        "{} {} {}",
        b.apply_to("┌─"),
        theme.error.apply_to("Error"),
        b.apply_to("─".repeat(BOX_WIDTH - 9))
    )];

    for line in message.lines() {
        lines.push(format!("{} {}", b.apply_to("│"), theme.error.apply_to(line)));
    }
    if message.is_empty() {
        lines.push(b.apply_to("│").to_string());
    }

    lines.push(b.apply_to(format!("└{}", "─".repeat(BOX_WIDTH - 1))).to_string());
    lines
}

/// Full report for a completed check.
pub fn render_result(result: &CheckResult, theme: &CheckerTheme) -> Vec<String> {
    let mut lines = render_summary(result, theme);

    lines.push(String::new());
    lines.push(theme.heading.apply_to("Detailed Results").to_string());

    for file in &result.details {
        lines.push(String::new());
        lines.extend(render_file(file, theme));
    }

    lines
}

/// Summary block: totals and the per-check table.
pub fn render_summary(result: &CheckResult, theme: &CheckerTheme) -> Vec<String> {
    let mut lines = vec![theme.heading.apply_to("Results Summary").to_string()];

    lines.push(format!(
        "  {} {}",
        theme.key.apply_to("Total files checked:"),
        result.summary.total_files
    ));
    lines.push(format!(
        "  Passed: {} | Failed: {}",
        theme.success.apply_to(result.passed_files()),
        theme.error.apply_to(result.failed_files())
    ));
    lines.push(String::new());

    for line in summary_table(result, theme).render_lines() {
        lines.push(format!("  {}", line));
    }

    lines
}

/// Per-check summary table, one row per summary entry.
pub fn summary_table(result: &CheckResult, theme: &CheckerTheme) -> Table {
    let mut table = Table::new(vec!["Check", "Passed", "Failed"])
        .align(1, Align::Center)
        .align(2, Align::Center);

    for entry in result.summary.checks.values() {
        table.add_row(vec![
            entry.label.clone(),
            theme.success.apply_to(entry.passed).to_string(),
            theme.error.apply_to(entry.failed).to_string(),
        ]);
    }

    table
}

/// Card for one file: name, overall status and each check.
pub fn render_file(file: &FileResult, theme: &CheckerTheme) -> Vec<String> {
    let kind = StatusKind::from_passed(file.passed);
    let mut lines = vec![
        format!(
            "  {} {}",
            kind.styled(theme),
            theme.highlight.apply_to(&file.file_name)
        ),
        format!("    Overall: {}", kind.style(theme).apply_to(kind.label())),
    ];

    for check in file.checks.values() {
        lines.extend(render_check(check, theme));
    }

    lines
}

/// Sub-block for one check on one file.
pub fn render_check(check: &CheckDetail, theme: &CheckerTheme) -> Vec<String> {
    let kind = StatusKind::from_passed(check.status.is_pass());
    let mut lines = vec![
        format!("    {}", theme.key.apply_to(&check.label)),
        format!(
            "      Status: {}",
            kind.style(theme).apply_to(check.status.capitalized())
        ),
    ];

    if let Some(message) = check.message.as_deref().filter(|m| !m.is_empty()) {
        lines.push(format!("      {}", theme.dim.apply_to(message)));
    }

    for detail in check.details.iter().flatten() {
        lines.push(format!("      • {}", theme.dim.apply_to(detail)));
    }

    lines
}
