//! User input handling for skelgen.
//! Collects one value per declared parameter from the standard input.

use crate::config::Parameter;
use crate::error::{Error, Result};
use dialoguer::Input;
use indexmap::IndexMap;

/// Trait for reading parameter values, so collection can be driven by
/// scripted answers in tests.
pub trait Prompter {
    /// Asks a single question and returns the raw answer line.
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Production prompter backed by dialoguer.
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
    fn ask(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Prompts for every declared parameter, in declaration order.
///
/// The raw answer line, empty lines included, becomes the parameter's value.
/// After collection a `key = value` summary is printed.
///
/// # Arguments
/// * `prompter` - Input source for answers
/// * `parameters` - Declared parameters from the descriptor
///
/// # Returns
/// * `Result<IndexMap<String, String>>` - Value per parameter identifier
pub fn collect_values(
    prompter: &dyn Prompter,
    parameters: &[Parameter],
) -> Result<IndexMap<String, String>> {
    let mut values = IndexMap::new();

    println!();
    for parameter in parameters {
        let answer = prompter.ask(&parameter.prompt)?;
        values.insert(parameter.name.clone(), answer);
    }

    if !values.is_empty() {
        println!("\nThe following parameters are specified:\n");
        for (key, value) in &values {
            println!("{} = {}", key, value);
        }
        println!();
    }

    Ok(values)
}
