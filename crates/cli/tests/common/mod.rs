//! Shared fixtures for driving the menus without a terminal.

use std::collections::VecDeque;

use anyhow::{anyhow, bail};
use stockroom_cli::Prompt;

/// One scripted answer, consumed in order.
#[derive(Debug, Clone)]
pub enum Answer {
    Pick(usize),
    Text(&'static str),
    Yes,
    No,
}

/// A [`Prompt`] that replays a fixed script and records everything said.
///
/// Running out of answers is an error, so a flow that loops longer than
/// expected fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, prompt: &str) -> anyhow::Result<Answer> {
        self.transcript.push(format!("? {prompt}"));
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of answers at prompt '{prompt}'"))
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
        match self.next(prompt)? {
            Answer::Pick(index) => {
                if let Some(label) = items.get(index) {
                    self.transcript.push(format!("> {label}"));
                }
                Ok(index)
            }
            other => bail!("expected a menu pick for '{prompt}', script has {other:?}"),
        }
    }

    fn input(&mut self, prompt: &str) -> anyhow::Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text.to_string()),
            other => bail!("expected text for '{prompt}', script has {other:?}"),
        }
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        match self.next(prompt)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => bail!("expected yes/no for '{prompt}', script has {other:?}"),
        }
    }

    fn say(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
