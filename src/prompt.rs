//! User input and interaction handling.
//! Questions are collected by the resolver and issued as a single batch;
//! the `Prompter` trait keeps the interactive backend swappable in tests.

use dialoguer::{Input, Select};
use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A single question to put to the user.
#[derive(Debug, Clone)]
pub struct Question {
    /// Answer key in the returned map
    pub key: String,
    /// Prompt text shown to the user
    pub message: String,
    /// Default answer; for selections, must name one of the choices
    pub default: String,
    /// Non-empty turns the question into a selection
    pub choices: Vec<String>,
}

impl Question {
    pub fn input(key: &str, message: &str, default: &str) -> Self {
        Self {
            key: key.to_string(),
            message: message.to_string(),
            default: default.to_string(),
            choices: Vec::new(),
        }
    }

    pub fn select(key: &str, message: &str, choices: Vec<String>) -> Self {
        let default = choices.first().cloned().unwrap_or_default();
        Self { key: key.to_string(), message: message.to_string(), default, choices }
    }
}

/// Trait for interactive prompting backends.
pub trait Prompter {
    /// Asks all questions in order and returns answers keyed by question key.
    fn ask(&self, questions: &[Question]) -> Result<IndexMap<String, String>>;
}

/// Terminal prompting backend built on dialoguer.
pub struct DialoguerPrompter {}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, questions: &[Question]) -> Result<IndexMap<String, String>> {
        let mut answers = IndexMap::new();

        for question in questions {
            let answer = if question.choices.is_empty() {
                Input::new()
                    .with_prompt(&question.message)
                    .default(question.default.clone())
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| Error::PromptError(e.to_string()))?
            } else {
                let default_index = question
                    .choices
                    .iter()
                    .position(|choice| choice == &question.default)
                    .unwrap_or(0);
                let selection = Select::new()
                    .with_prompt(&question.message)
                    .default(default_index)
                    .items(&question.choices)
                    .interact()
                    .map_err(|e| Error::PromptError(e.to_string()))?;
                question.choices[selection].clone()
            };

            answers.insert(question.key.clone(), answer);
        }

        Ok(answers)
    }
}
