use std::path::Path;

use colored::Colorize;

use crate::{
    error::AppError,
    git::Scope,
    process::CommandRunner,
    prompt::Prompter,
    storage::UserStore,
    switcher::{FlowOutcome, add_flow, delete_flow, switch_flow},
};

/// Actions offered by the top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Switch,
    Add,
    Delete,
}

impl Action {
    /// Menu order
    pub const ALL: [Action; 3] = [Action::Switch, Action::Add, Action::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Action::Switch => "Select a git user",
            Action::Add => "Add a new git user",
            Action::Delete => "Delete an existing git user",
        }
    }

    /// Prefix printed in front of an error from this action
    pub fn failure_context(self) -> &'static str {
        match self {
            Action::Switch => "could not select user",
            Action::Add => "could not add new user",
            Action::Delete => "could not delete user",
        }
    }
}

/// Asks which action to run
pub fn choose_action<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Action, AppError> {
    let labels: Vec<String> = Action::ALL.iter().map(|action| action.label().to_string()).collect();
    let index: usize = prompter.select("Select action", &labels)?;
    Action::ALL
        .get(index)
        .copied()
        .ok_or(AppError::Index { index, len: labels.len() })
}

/// Runs `action` against the store and reports the outcome
///
/// # Arguments
/// * `scope` - Git configuration a switch writes to
/// * `home_dir` - Home directory used for the default key path when adding
pub fn run_action<P, R>(
    action: Action,
    store: &mut UserStore,
    prompter: &mut P,
    runner: &mut R,
    scope: Scope,
    home_dir: Option<&Path>,
) -> Result<(), AppError>
where
    P: Prompter + ?Sized,
    R: CommandRunner + ?Sized,
{
    match action {
        Action::Add => {
            let home_dir: &Path = home_dir.ok_or(AppError::HomeDirNotFound)?;
            let user = add_flow(store, prompter, home_dir)?;
            println!("{} {}", "added user:".green(), user.name);
        }
        Action::Delete => match delete_flow(store, prompter)? {
            FlowOutcome::Completed(user) => println!("{} {}", "deleted user:".green(), user.name),
            FlowOutcome::EmptyStore => println!("{}", "no users found".yellow()),
        },
        Action::Switch => match switch_flow(store, prompter, runner, scope)? {
            FlowOutcome::Completed(user) => println!(
                "{} {} <{}> ({scope})",
                "switched to user:".green(),
                user.name,
                user.email
            ),
            FlowOutcome::EmptyStore => println!("{}", "no users found".yellow()),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        switcher::default_ssh_key_path,
        test_support::{RecordingRunner, ScriptedPrompter},
        user::User,
    };

    #[test]
    fn menu_offers_actions_in_order() {
        let mut prompter = ScriptedPrompter::new().then_select(2);

        assert_eq!(choose_action(&mut prompter).unwrap(), Action::Delete);
        assert_eq!(
            prompter.offered,
            vec![vec![
                "Select a git user".to_string(),
                "Add a new git user".to_string(),
                "Delete an existing git user".to_string(),
            ]]
        );
    }

    #[test]
    fn unknown_menu_choice_is_index_error() {
        let mut prompter = ScriptedPrompter::new().then_select(3);

        assert!(matches!(choose_action(&mut prompter), Err(AppError::Index { index: 3, len: 3 })));
    }

    #[test]
    fn add_without_home_directory_fails_before_prompting() {
        let temp = TempDir::new().unwrap();
        let mut store = UserStore::open_in(temp.path()).unwrap();
        let mut prompter = ScriptedPrompter::new().then_text("Ada");
        let mut runner = RecordingRunner::new();

        let err = run_action(Action::Add, &mut store, &mut prompter, &mut runner, Scope::Local, None)
            .unwrap_err();

        assert!(matches!(err, AppError::HomeDirNotFound), "got {err:?}");
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn add_then_switch_through_menu() {
        let temp = TempDir::new().unwrap();
        let mut store = UserStore::open_in(temp.path()).unwrap();
        let home = Path::new("/home/ada");
        let mut runner = RecordingRunner::new();

        let mut adding = ScriptedPrompter::new()
            .then_text("Ada")
            .then_text("ada@x.com")
            .then_text("");
        run_action(Action::Add, &mut store, &mut adding, &mut runner, Scope::Global, Some(home))
            .unwrap();
        let expected = User::new("Ada", "ada@x.com", default_ssh_key_path(home));
        assert_eq!(store.users(), &[expected]);

        let mut switching = ScriptedPrompter::new().then_select(0);
        run_action(Action::Switch, &mut store, &mut switching, &mut runner, Scope::Global, Some(home))
            .unwrap();
        assert_eq!(runner.commands().last().unwrap(), "git config --global user.email ada@x.com");
    }

    #[test]
    fn empty_store_is_not_a_failure() {
        let temp = TempDir::new().unwrap();
        let mut store = UserStore::open_in(temp.path()).unwrap();
        let mut runner = RecordingRunner::new();

        for action in [Action::Switch, Action::Delete] {
            let mut prompter = ScriptedPrompter::new();
            run_action(action, &mut store, &mut prompter, &mut runner, Scope::Local, None).unwrap();
        }
        assert!(runner.commands().is_empty());
    }
}
