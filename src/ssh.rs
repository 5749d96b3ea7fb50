use crate::{error::AppError, process::CommandRunner};

const SSH_ADD: &str = "ssh-add";

/// Removes every identity from the running SSH agent (`ssh-add -D`)
pub fn clear_agent<R: CommandRunner + ?Sized>(runner: &mut R) -> Result<(), AppError> {
    runner.run(SSH_ADD, &["-D"])
}

/// Adds the private key at `key_path` to the running SSH agent
pub fn load_key<R: CommandRunner + ?Sized>(runner: &mut R, key_path: &str) -> Result<(), AppError> {
    runner.run(SSH_ADD, &[key_path])
}
