pub mod show;
pub mod suggest;
pub mod timezones;
pub mod update;

// The match over `Action` lives in `run` so this module stays a plain index.
mod run;

#[derive(Debug)]
pub enum Action {
    Show(show::Args),
    Update(update::Args),
    Suggest(suggest::Args),
    Timezones,
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
