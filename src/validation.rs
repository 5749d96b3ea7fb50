use colored::Colorize;
use validator::ValidateEmail;

use crate::{error::AppError, prompt::Prompter};

/// Maximum length for git email address
const MAX_EMAIL_LENGTH: usize = 100;
/// Bounds for the top-level domain of an email address
const MIN_TLD_LENGTH: usize = 2;
const MAX_TLD_LENGTH: usize = 64;

/// Prompts user for input until valid input is provided
///
/// Validation failures are printed and the prompt is asked again; any other
/// error, including a cancelled prompt, is returned.
pub fn prompt_until_valid<P, F>(
    prompter: &mut P,
    prompt_message: &str,
    input_validation: F,
) -> Result<String, AppError>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let input: String = prompter.text(prompt_message)?;
        match input_validation(&input) {
            Ok(_) => break Ok(input),
            Err(AppError::Validation(msg)) => eprintln!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

/// Validates email input as `local@domain.tld`
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        Err(AppError::Validation("Email cannot be empty".to_string()))
    } else if email.len() > MAX_EMAIL_LENGTH {
        Err(AppError::Validation(format!("Email too long, max {} characters", MAX_EMAIL_LENGTH)))
    } else if !email.validate_email() || !has_valid_tld(email) {
        Err(AppError::Validation("Invalid email address".to_string()))
    } else {
        Ok(())
    }
}

fn has_valid_tld(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty()
                && (MIN_TLD_LENGTH..=MAX_TLD_LENGTH).contains(&tld.len())
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}
