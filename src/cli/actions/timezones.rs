use crate::form::TIMEZONES;
use anyhow::Result;

/// Print the supported timezones, one per line.
pub fn execute() -> Result<()> {
    for timezone in TIMEZONES {
        println!("{timezone}");
    }
    Ok(())
}
