//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::{CheckerError, Result};

use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to CheckerError.
fn map_dialoguer_err(e: dialoguer::Error) -> CheckerError {
    CheckerError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| parse_bool_answer(s))
        .unwrap_or(true);

    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

/// Free-text input. Empty answers are rejected in the prompt itself.
fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(false);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_text_on(term).map_err(map_dialoguer_err)?
    };

    Ok(PromptResult::String(result))
}

/// Interpret a textual yes/no answer.
pub fn parse_bool_answer(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_affirmative_answers() {
        assert!(parse_bool_answer("yes"));
        assert!(parse_bool_answer("Y"));
        assert!(parse_bool_answer(" true "));
        assert!(parse_bool_answer("1"));
    }

    #[test]
    fn parses_negative_answers() {
        assert!(!parse_bool_answer("no"));
        assert!(!parse_bool_answer("false"));
        assert!(!parse_bool_answer(""));
    }

    #[test]
    fn prompt_theme_has_no_prefix() {
        let theme = prompt_theme();
        assert_eq!(theme.prompt_prefix.to_string(), "");
    }
}
