//! Scripted stand-ins for the terminal and external programs.

use std::collections::VecDeque;

use inquire::InquireError;

use crate::{
    error::AppError,
    process::{CommandRunner, display_command},
    prompt::Prompter,
};

enum Answer {
    Select(usize),
    Text(String),
}

/// Answers prompts from a queue; an exhausted queue behaves like a cancelled prompt
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    /// Options offered by each select prompt, in order
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_select(mut self, index: usize) -> Self {
        self.answers.push_back(Answer::Select(index));
        self
    }

    pub fn then_text(mut self, input: &str) -> Self {
        self.answers.push_back(Answer::Text(input.to_string()));
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _message: &str, options: &[String]) -> Result<usize, AppError> {
        self.offered.push(options.to_vec());
        match self.answers.pop_front() {
            Some(Answer::Select(index)) => Ok(index),
            Some(Answer::Text(input)) => panic!("expected a select answer, scripted text {input:?}"),
            None => Err(InquireError::OperationCanceled.into()),
        }
    }

    fn text(&mut self, _message: &str) -> Result<String, AppError> {
        match self.answers.pop_front() {
            Some(Answer::Text(input)) => Ok(input),
            Some(Answer::Select(index)) => panic!("expected a text answer, scripted select {index}"),
            None => Err(InquireError::OperationCanceled.into()),
        }
    }
}

/// Records every command instead of running it
#[derive(Default)]
pub struct RecordingRunner {
    commands: Vec<String>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the command rendered as `command` exit unsuccessfully
    pub fn failing_on(command: &str) -> Self {
        Self {
            commands: Vec::new(),
            fail_on: Some(command.to_string()),
        }
    }

    /// Commands attempted so far, including a failed one
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let command = display_command(program, args);
        self.commands.push(command.clone());
        if self.fail_on.as_deref() == Some(command.as_str()) {
            return Err(AppError::Process {
                command,
                reason: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
