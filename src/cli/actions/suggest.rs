use crate::{
    cli::globals::GlobalArgs,
    form::{ProfileDraft, ProfileForm},
};
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub query: String,
}

/// Print the suggestions the form would show for `query`.
/// # Errors
/// Returns an error if the skills file cannot be read.
pub fn execute(args: &Args) -> Result<()> {
    let mut form = ProfileForm::new(ProfileDraft::default(), args.globals.catalog()?);
    form.set_skill_input(args.query.as_str());

    for skill in form.visible_suggestions() {
        println!("{skill}");
    }
    Ok(())
}
