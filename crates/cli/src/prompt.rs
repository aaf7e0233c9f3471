//! User interaction seam.
//!
//! Menus talk to a [`Prompt`] rather than to the terminal directly so the
//! flows can be driven from a script in tests.

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use stockroom_core::DomainResult;

pub trait Prompt {
    /// Pick one entry of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<usize>;

    /// Free-text answer (may be empty).
    fn input(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;

    /// Print a line of output.
    fn say(&mut self, text: &str);

    /// Hold the screen until the user is done reading.
    fn pause(&mut self) -> anyhow::Result<()> {
        self.input("Press Enter to return to the main menu...")
            .map(|_| ())
    }
}

/// Ask `question` until `parse` accepts the answer, echoing each rejection.
pub fn ask_until<T>(
    prompt: &mut dyn Prompt,
    question: &str,
    parse: impl Fn(&str) -> DomainResult<T>,
) -> anyhow::Result<T> {
    loop {
        let answer = prompt.input(question)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => prompt.say(&format!(" Invalid input: {err}")),
        }
    }
}

/// Interactive prompts on the controlling terminal.
pub struct Terminal {
    theme: ColorfulTheme,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for Terminal {
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .context("failed to read menu selection")
    }

    fn input(&mut self, prompt: &str) -> anyhow::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("failed to read input")
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()
            .context("failed to read confirmation")
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}
