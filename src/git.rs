use std::fmt;

use crate::{error::AppError, process::CommandRunner};

/// Which git configuration a switch writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Repository in the current working directory
    #[default]
    Local,
    /// The OS user's global git configuration
    Global,
}

impl Scope {
    pub fn from_global_flag(global: bool) -> Self {
        if global { Scope::Global } else { Scope::Local }
    }

    /// Flag passed to `git config`
    pub fn as_flag(self) -> &'static str {
        match self {
            Scope::Local => "--local",
            Scope::Global => "--global",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Local => f.write_str("local"),
            Scope::Global => f.write_str("global"),
        }
    }
}

/// Executes a Git config set command
///
/// # Arguments
/// * `scope` - Configuration written to
/// * `key` - Git config key to set (user.name or user.email)
/// * `value` - Value to set for key (name or email)
pub fn set_git_config<R: CommandRunner + ?Sized>(
    runner: &mut R,
    scope: Scope,
    key: &str,
    value: &str,
) -> Result<(), AppError> {
    runner.run("git", &["config", scope.as_flag(), key, value])
}
