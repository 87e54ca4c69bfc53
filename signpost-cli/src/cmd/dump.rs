use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use signpost_core::Format;

use super::{add_document_args, read_document};
use crate::settings::Settings;

pub fn make_subcommand() -> Command {
    add_document_args(Command::new("dump"))
        .about("Print the site configuration document in a structured format")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: json or toml (default: json)"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    print!("{}", render(args)?);
    Ok(())
}

fn render(args: &ArgMatches) -> Result<String> {
    let settings = Settings::load(args)?;
    let format: Format = settings
        .format
        .parse()
        .with_context(|| format!("unknown output format `{}`", settings.format))?;

    let config = read_document(&settings)?;
    let mut text = config.encode(format)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
