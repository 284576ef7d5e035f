//! Interactive confirmation for destructive commands.

use std::io::{self, BufRead, Write};

use anyhow::anyhow;

use crate::client::{CliError, CliResult};

/// Source of yes/no answers for destructive operations.
pub(crate) trait Confirm {
    /// Ask `question` and report whether the user agreed.
    fn confirm(&mut self, question: &str) -> CliResult<bool>;
}

/// Prompts on stderr and reads a single line from stdin.
pub(crate) struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> CliResult<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{question} (y/N): ")
            .and_then(|()| stderr.flush())
            .map_err(|err| CliError::failure(anyhow!("failed to write prompt: {err}")))?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|err| CliError::failure(anyhow!("failed to read confirmation: {err}")))?;
        Ok(is_affirmative(&answer))
    }
}

/// Only `y` (any case, surrounding whitespace ignored) counts as agreement.
#[must_use]
pub(crate) fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Replays canned answers and records every question asked.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedConfirm {
    answers: std::collections::VecDeque<String>,
    pub(crate) questions: Vec<String>,
}

#[cfg(test)]
impl ScriptedConfirm {
    pub(crate) fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|answer| (*answer).to_string()).collect(),
            questions: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, question: &str) -> CliResult<bool> {
        self.questions.push(question.to_string());
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| CliError::validation(format!("unexpected prompt: {question}")))?;
        Ok(is_affirmative(&answer))
    }
}
