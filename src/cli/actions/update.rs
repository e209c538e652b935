use crate::{
    api::{types::ProfileRecord, ProfileApi},
    cli::globals::GlobalArgs,
    form::{ProfileForm, SubmitOutcome, ValidationErrors, SUBMIT_FALLBACK_MESSAGE},
};
use anyhow::{bail, Context, Result};
use tracing::warn;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub fields: Vec<(String, String)>,
    pub add_skills: Vec<String>,
    pub remove_skills: Vec<String>,
    pub dry_run: bool,
}

/// Seed a form from the current profile, apply the requested edits and submit.
/// # Errors
/// Returns an error if the profile cannot be fetched, an edit names an unknown
/// or unavailable field, validation fails, or the update is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.globals.api_client()?;
    let catalog = args.globals.catalog()?;

    let record = api
        .fetch_profile()
        .await
        .context("Could not fetch the current profile")?;

    let mut form = ProfileForm::from_record(&record, catalog).with_on_complete(print_record);
    apply_edits(&mut form, &args)?;

    if args.dry_run {
        return dry_run(&form);
    }

    submit(&mut form, &api).await
}

/// Apply `--set`, `--add-skill` and `--remove-skill`, in that order.
pub(crate) fn apply_edits(form: &mut ProfileForm, args: &Args) -> Result<()> {
    for (name, value) in &args.fields {
        form.set_field_by_name(name, value.as_str())
            .with_context(|| format!("Cannot set {name}"))?;
    }

    for skill in &args.add_skills {
        if !form.add_skill(skill) {
            warn!("skill {skill:?} ignored: blank or already present");
        }
    }

    for skill in &args.remove_skills {
        if !form.remove_skill(skill) {
            warn!("skill {skill:?} not found in profile");
        }
    }

    Ok(())
}

fn dry_run(form: &ProfileForm) -> Result<()> {
    let errors = form.validate();
    if !errors.is_empty() {
        report(&errors);
        bail!("profile has {} validation error(s)", errors.len());
    }

    println!("{}", serde_json::to_string_pretty(&form.draft().to_update())?);
    Ok(())
}

pub(crate) async fn submit<A: ProfileApi>(form: &mut ProfileForm, api: &A) -> Result<()> {
    match form.submit(api).await {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid => {
            report(form.errors());
            bail!("profile has {} validation error(s)", form.errors().len())
        }
        SubmitOutcome::Failed => {
            bail!(
                "{}",
                form.general_error().unwrap_or(SUBMIT_FALLBACK_MESSAGE)
            )
        }
        SubmitOutcome::Busy | SubmitOutcome::Discarded => {
            bail!("profile submission did not complete")
        }
    }
}

fn report(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("{field}: {message}");
    }
}

fn print_record(record: &ProfileRecord) {
    match serde_json::to_string_pretty(record) {
        Ok(json) => println!("{json}"),
        Err(err) => warn!("could not render saved profile: {err}"),
    }
}
