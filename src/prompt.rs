//! User input and interaction handling.
//! The resolver talks to the terminal through the [`Prompter`] trait so it
//! can be driven by a fake in tests.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};

/// Interactive prompt capability consumed by the configuration resolver.
pub trait Prompter {
    /// Asks for a free-text value, offering `default` as the accepted answer
    /// when the user just presses enter.
    fn ask_text(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks a yes/no question with the given default.
    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_text(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
