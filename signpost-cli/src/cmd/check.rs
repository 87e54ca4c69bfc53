use anyhow::Result;
use clap::{ArgMatches, Command};
use signpost_core::SiteConfig;

use super::{add_document_args, load_document};

pub fn make_subcommand() -> Command {
    add_document_args(Command::new("check"))
        .about("Validate the site configuration document")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_document(args)?;
    println!("{}", summary(&config));
    Ok(())
}

fn summary(config: &SiteConfig) -> String {
    format!(
        "ok: {} nav entries, {} sidebars, {} links",
        config.nav.len(),
        config.sidebars.len(),
        config.link_count()
    )
}
