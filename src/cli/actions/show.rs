use crate::{api::ProfileApi, cli::globals::GlobalArgs};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Fetch the current profile and print it as JSON.
/// # Errors
/// Returns an error if the API is unreachable or rejects the request.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.globals.api_client()?;
    let record = api
        .fetch_profile()
        .await
        .context("Could not fetch the current profile")?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
