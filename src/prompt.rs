//! Confirmation capability for destructive operations
//!
//! The engine never reads the terminal itself; it asks a [`Prompt`] supplied by the caller.

use std::collections::VecDeque;

use inquire::{Confirm, InquireError, Text};

use crate::error::{BundlerError, Result};

/// How much effort an answer takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Plain y/n question
    YesNo,
    /// The user has to type `yes`
    TypeYes,
}

/// A question put to the user before a destructive action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
    pub strictness: Strictness,
}

impl Confirmation {
    pub fn yes_no(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            strictness: Strictness::YesNo,
        }
    }

    pub fn typed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            strictness: Strictness::TypeYes,
        }
    }
}

/// Something that can answer a [`Confirmation`]
pub trait Prompt {
    fn confirm(&mut self, request: &Confirmation) -> Result<bool>;
}

/// Asks on the terminal using inquire; ESC and Ctrl-C count as "no"
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn confirm(&mut self, request: &Confirmation) -> Result<bool> {
        let answer = match request.strictness {
            Strictness::YesNo => Confirm::new(&request.message)
                .with_default(false)
                .with_help_message("Press 'y' to continue, Enter or 'n' to cancel")
                .prompt(),
            Strictness::TypeYes => Text::new(&request.message)
                .with_help_message("Type 'yes' to confirm, anything else cancels")
                .prompt()
                .map(|text| is_affirmative(&text)),
        };

        match answer {
            Ok(confirmed) => Ok(confirmed),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
            Err(e) => Err(BundlerError::PromptFailed {
                message: e.to_string(),
            }),
        }
    }
}

/// Typed confirmation accepts `yes` in any case, surrounding whitespace ignored
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Non-interactive `--yes`
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, request: &Confirmation) -> Result<bool> {
        tracing::debug!("Auto-confirmed: {}", request.message);
        Ok(true)
    }
}

/// Replays prepared answers and records the questions; an exhausted script answers "no"
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    pub asked: Vec<Confirmation>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, request: &Confirmation) -> Result<bool> {
        self.asked.push(request.clone());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
