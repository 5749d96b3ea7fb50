use colored::Colorize;
use inquire::{Select, Text};

use crate::error::AppError;

/// Interactive input used by the user flows
pub trait Prompter {
    /// Asks for one of `options`, returning the chosen position
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize, AppError>;

    /// Asks for a line of free text
    fn text(&mut self, message: &str) -> Result<String, AppError>;
}

/// Terminal prompts backed by `inquire`
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize, AppError> {
        let message = format!("{}", message.blue());
        let choice = Select::new(&message, options.to_vec()).raw_prompt()?;
        Ok(choice.index)
    }

    fn text(&mut self, message: &str) -> Result<String, AppError> {
        let message = format!("{}", message.blue());
        Ok(Text::new(&message).prompt()?)
    }
}
