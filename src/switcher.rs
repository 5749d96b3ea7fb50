use std::path::Path;

use tracing::{info, warn};

use crate::{
    error::AppError,
    git::{Scope, set_git_config},
    process::CommandRunner,
    prompt::Prompter,
    ssh,
    storage::UserStore,
    user::User,
    validation::{prompt_until_valid, validate_input_email},
};

/// Result of a flow that picks a stored user
#[derive(Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The flow ran on the chosen user
    Completed(User),
    /// Nothing stored, so nothing was offered
    EmptyStore,
}

/// Stages of an identity switch, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchStep {
    AgentCleared,
    KeyLoaded,
    NameSet,
    EmailSet,
}

impl SwitchStep {
    pub const SEQUENCE: [SwitchStep; 4] = [
        SwitchStep::AgentCleared,
        SwitchStep::KeyLoaded,
        SwitchStep::NameSet,
        SwitchStep::EmailSet,
    ];

    fn apply<R>(self, runner: &mut R, user: &User, scope: Scope) -> Result<(), AppError>
    where
        R: CommandRunner + ?Sized,
    {
        match self {
            SwitchStep::AgentCleared => ssh::clear_agent(runner),
            SwitchStep::KeyLoaded => ssh::load_key(runner, &user.ssh_key_path),
            SwitchStep::NameSet => set_git_config(runner, scope, "user.name", &user.name),
            SwitchStep::EmailSet => set_git_config(runner, scope, "user.email", &user.email),
        }
    }
}

/// Key offered when the user leaves the key path blank, `<home>/.ssh/id_rsa`
pub fn default_ssh_key_path(home_dir: &Path) -> String {
    home_dir.join(".ssh").join("id_rsa").to_string_lossy().into_owned()
}

/// Collects a new identity from the prompter and adds it to the store.
///
/// A duplicate email is returned as an error rather than asked again.
pub fn add_flow<P>(store: &mut UserStore, prompter: &mut P, home_dir: &Path) -> Result<User, AppError>
where
    P: Prompter + ?Sized,
{
    let name: String = prompter.text("Enter git user name")?;
    let email: String = prompt_until_valid(prompter, "Enter git user email", validate_input_email)?;

    let default_key: String = default_ssh_key_path(home_dir);
    let key_input: String =
        prompter.text(&format!("Enter ssh key file path, default: ({default_key})"))?;
    let ssh_key_path: String = if key_input.is_empty() { default_key } else { key_input };

    let user = User::new(name, email, ssh_key_path);
    store.add(user.clone())?;
    Ok(user)
}

/// Lets the user pick a stored identity and removes it
pub fn delete_flow<P>(store: &mut UserStore, prompter: &mut P) -> Result<FlowOutcome, AppError>
where
    P: Prompter + ?Sized,
{
    let Some(index) = select_user(store, prompter)? else {
        return Ok(FlowOutcome::EmptyStore);
    };

    let removed: User = store.remove(index)?;
    Ok(FlowOutcome::Completed(removed))
}

/// Lets the user pick a stored identity and makes it the active one at `scope`
pub fn switch_flow<P, R>(
    store: &UserStore,
    prompter: &mut P,
    runner: &mut R,
    scope: Scope,
) -> Result<FlowOutcome, AppError>
where
    P: Prompter + ?Sized,
    R: CommandRunner + ?Sized,
{
    let Some(index) = select_user(store, prompter)? else {
        return Ok(FlowOutcome::EmptyStore);
    };

    let user: User = store.users()[index].clone();
    switch_identity(runner, &user, scope)?;
    Ok(FlowOutcome::Completed(user))
}

/// Runs every [`SwitchStep`] for `user`, stopping at the first failure.
///
/// Steps that already ran are not undone.
pub fn switch_identity<R>(runner: &mut R, user: &User, scope: Scope) -> Result<(), AppError>
where
    R: CommandRunner + ?Sized,
{
    for step in SwitchStep::SEQUENCE {
        if let Err(err) = step.apply(runner, user, scope) {
            warn!("switch to {} halted before {:?}: {err}", user.email, step);
            return Err(err);
        }
        info!("{:?} for {}", step, user.email);
    }
    Ok(())
}

fn select_user<P>(store: &UserStore, prompter: &mut P) -> Result<Option<usize>, AppError>
where
    P: Prompter + ?Sized,
{
    if store.is_empty() {
        return Ok(None);
    }

    let options: Vec<String> = store.users().iter().map(ToString::to_string).collect();
    let index: usize = prompter.select("Select a git user", &options)?;
    if index >= options.len() {
        return Err(AppError::Index { index, len: options.len() });
    }
    Ok(Some(index))
}
