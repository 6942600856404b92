use skelgen::config::Parameter;
use skelgen::error::{Error, Result};
use skelgen::prompt::{collect_values, Prompter};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Prompter fed from a fixed list of answer lines.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, prompt: &str) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError("no more scripted answers".to_string()))
    }
}

fn parameters(pairs: &[(&str, &str)]) -> Vec<Parameter> {
    pairs
        .iter()
        .map(|(name, prompt)| Parameter { name: name.to_string(), prompt: prompt.to_string() })
        .collect()
}

#[test]
fn test_collects_one_value_per_parameter_in_order() {
    let prompter = ScriptedPrompter::new(&["Acme", "Jo"]);
    let params = parameters(&[("proj", "Project name"), ("owner", "Owner name")]);

    let values = collect_values(&prompter, &params).unwrap();

    let collected: Vec<_> = values.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(collected, vec![("proj", "Acme"), ("owner", "Jo")]);
    assert_eq!(
        prompter.asked.borrow().as_slice(),
        ["Project name".to_string(), "Owner name".to_string()]
    );
}

#[test]
fn test_empty_answer_becomes_empty_value() {
    let prompter = ScriptedPrompter::new(&[""]);
    let params = parameters(&[("proj", "Project name")]);

    let values = collect_values(&prompter, &params).unwrap();
    assert_eq!(values.get("proj").map(String::as_str), Some(""));
}

#[test]
fn test_no_parameters_asks_nothing() {
    let prompter = ScriptedPrompter::new(&[]);
    let values = collect_values(&prompter, &[]).unwrap();

    assert!(values.is_empty());
    assert!(prompter.asked.borrow().is_empty());
}

#[test]
fn test_prompt_failure_propagates() {
    let prompter = ScriptedPrompter::new(&[]);
    let params = parameters(&[("proj", "Project name")]);

    let result = collect_values(&prompter, &params);
    assert!(matches!(result, Err(Error::PromptError(_))));
}
