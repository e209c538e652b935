use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TOKEN: &str = "token";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_SKILLS_FILE: &str = "skills-file";
pub const ARG_VERBOSITY: &str = "verbosity";

pub const ARG_SET: &str = "set";
pub const ARG_ADD_SKILL: &str = "add-skill";
pub const ARG_REMOVE_SKILL: &str = "remove-skill";
pub const ARG_DRY_RUN: &str = "dry-run";
pub const ARG_QUERY: &str = "query";

/// Accepts a count (`0`-`5`) or a level name for `PROFILE_FORM_LOG_LEVEL`.
#[must_use]
pub fn log_level_parser() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

/// Parses `--set name=value`. The value may be empty; the name may not.
#[must_use]
pub fn field_assignment_parser() -> ValueParser {
    ValueParser::from(
        move |raw: &str| -> std::result::Result<(String, String), String> {
            let (name, value) = raw
                .split_once('=')
                .ok_or_else(|| format!("expected name=value, got {raw:?}"))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(format!("missing field name in {raw:?}"));
            }
            Ok((name.to_string(), value.to_string()))
        },
    )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("profile-form")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Marketplace API base URL, example: https://api.example.com")
                .env("PROFILE_FORM_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .long("token")
                .help("Session token sent as a bearer credential")
                .env("PROFILE_FORM_TOKEN")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value("10")
                .env("PROFILE_FORM_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_SKILLS_FILE)
                .long("skills-file")
                .help("Skill catalog, one skill per line (default: built-in list)")
                .env("PROFILE_FORM_SKILLS_FILE")
                .global(true),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("PROFILE_FORM_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(log_level_parser()),
        )
        .subcommand(Command::new("show").about("Print the current profile as JSON"))
        .subcommand(
            Command::new("update")
                .about("Edit the current profile and submit it")
                .arg(
                    Arg::new(ARG_SET)
                        .long("set")
                        .help("Set a field, e.g. fullName=Ana or socialLinks.github=ana")
                        .value_name("NAME=VALUE")
                        .action(ArgAction::Append)
                        .value_parser(field_assignment_parser()),
                )
                .arg(
                    Arg::new(ARG_ADD_SKILL)
                        .long("add-skill")
                        .help("Add a skill tag")
                        .value_name("SKILL")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new(ARG_REMOVE_SKILL)
                        .long("remove-skill")
                        .help("Remove a skill tag")
                        .value_name("SKILL")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new(ARG_DRY_RUN)
                        .long("dry-run")
                        .help("Validate and print the request body without sending it")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("suggest")
                .about("Suggest catalog skills matching a query")
                .arg(Arg::new(ARG_QUERY).required(true)),
        )
        .subcommand(Command::new("timezones").about("List the supported timezones"))
}
