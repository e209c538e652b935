use crate::cli::actions::{show, suggest, timezones, update, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Show(args) => show::execute(args).await,
        Action::Update(args) => update::execute(args).await,
        Action::Suggest(args) => suggest::execute(&args),
        Action::Timezones => timezones::execute(),
    }
}
