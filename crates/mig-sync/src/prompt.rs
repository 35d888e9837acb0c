//! Operator interaction.

use crate::{MigrateError, Result as MigrateResult};

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

/// Asks the operator questions. Implementations decide how.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Pick one of `choices`, returning its index
    async fn select(
        &self,
        message: &str,
        choices: &[String],
        default: usize,
    ) -> MigrateResult<usize>;

    async fn text(&self, message: &str, default: Option<&str>) -> MigrateResult<String>;

    async fn confirm(&self, message: &str, default: bool) -> MigrateResult<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Accept whatever the prompt offers as default
    Default,
    Select(usize),
    Text(String),
    Confirm(bool),
}

/// Prompter answering from a fixed script, recording every question asked.
///
/// Once the script runs out every prompt takes its default; a text prompt
/// without a default cancels.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<ScriptedAnswer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Messages of every prompt shown so far
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn next(&self, message: &str) -> ScriptedAnswer {
        self.asked
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
        self.answers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or(ScriptedAnswer::Default)
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn select(
        &self,
        message: &str,
        choices: &[String],
        default: usize,
    ) -> MigrateResult<usize> {
        let index = match self.next(message) {
            ScriptedAnswer::Select(index) => index,
            _ => default,
        };
        if index < choices.len() {
            Ok(index)
        } else {
            Err(MigrateError::configuration(format!(
                "choice {index} out of range for '{message}'"
            )))
        }
    }

    async fn text(&self, message: &str, default: Option<&str>) -> MigrateResult<String> {
        match (self.next(message), default) {
            (ScriptedAnswer::Text(text), _) => Ok(text),
            (_, Some(default)) => Ok(default.to_string()),
            _ => Err(MigrateError::cancelled()),
        }
    }

    async fn confirm(&self, message: &str, default: bool) -> MigrateResult<bool> {
        match self.next(message) {
            ScriptedAnswer::Confirm(answer) => Ok(answer),
            _ => Ok(default),
        }
    }
}
