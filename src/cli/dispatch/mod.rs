use crate::cli::{
    actions::{show, suggest, update, Action},
    commands,
    globals::GlobalArgs,
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::{path::PathBuf, time::Duration};

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = global_args(matches);

    match matches.subcommand() {
        Some(("show", _)) => Ok(Action::Show(show::Args { globals })),
        Some(("update", sub_m)) => Ok(Action::Update(update::Args {
            globals,
            fields: sub_m
                .get_many::<(String, String)>(commands::ARG_SET)
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            add_skills: strings(sub_m, commands::ARG_ADD_SKILL),
            remove_skills: strings(sub_m, commands::ARG_REMOVE_SKILL),
            dry_run: sub_m.get_flag(commands::ARG_DRY_RUN),
        })),
        Some(("suggest", sub_m)) => Ok(Action::Suggest(suggest::Args {
            globals,
            query: sub_m
                .get_one::<String>(commands::ARG_QUERY)
                .cloned()
                .context("missing required argument: <query>")?,
        })),
        Some(("timezones", _)) => Ok(Action::Timezones),
        _ => anyhow::bail!("no subcommand provided"),
    }
}

fn global_args(matches: &clap::ArgMatches) -> GlobalArgs {
    let timeout = matches
        .get_one::<u64>(commands::ARG_TIMEOUT)
        .copied()
        .unwrap_or(10);

    let mut globals = GlobalArgs::new(
        matches.get_one::<String>(commands::ARG_API_URL).cloned(),
        Duration::from_secs(timeout),
    );

    if let Some(token) = matches.get_one::<String>(commands::ARG_TOKEN) {
        globals.set_token(SecretString::from(token.clone()));
    }
    globals.skills_file = matches
        .get_one::<String>(commands::ARG_SKILLS_FILE)
        .map(PathBuf::from);

    globals
}

fn strings(matches: &clap::ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
