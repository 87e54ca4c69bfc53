use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use signpost_core::SidebarGroup;

use super::{add_document_args, load_document};

pub fn make_subcommand() -> Command {
    add_document_args(Command::new("sidebar"))
        .about("Show which sidebar a page path gets")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Page path, e.g. /java/springboot/")
                .required(true),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_document(args)?;
    let path = args
        .get_one::<String>("path")
        .map(String::as_str)
        .expect("PATH is a required argument");

    match config.sidebar_for(path) {
        Some((prefix, groups)) => print!("{}", render(prefix, groups)),
        None => println!("No sidebar applies to {path}"),
    }

    Ok(())
}

fn render(prefix: &str, groups: &[SidebarGroup]) -> String {
    let mut lines = vec![prefix.to_string()];
    for group in groups {
        lines.push(format!("  {}", group.heading));
        for item in &group.items {
            lines.push(format!("    {}  {}", item.label, item.link));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}
