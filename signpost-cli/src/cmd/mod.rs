use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use signpost_core::SiteConfig;
use tracing::info;

use crate::settings::Settings;

pub mod check;
pub mod dump;
pub mod export;
pub mod sidebar;

/// Arguments shared by every subcommand.
pub fn add_document_args(command: Command) -> Command {
    command.arg(
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("Site configuration document (default: nearest signpost.toml)"),
    )
}

/// Read the document named by the settings. Validation is left to the caller.
pub fn read_document(settings: &Settings) -> Result<SiteConfig> {
    let path = settings.document_path();
    info!(path = %path.display(), "reading site configuration");
    SiteConfig::read(&path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read and validate the document for commands that hand it on.
pub fn load_document(args: &ArgMatches) -> Result<SiteConfig> {
    let settings = Settings::load(args)?;
    let config = read_document(&settings)?;
    config
        .validate()
        .with_context(|| format!("{} is invalid", settings.document_path().display()))?;
    Ok(config)
}
