mod cmd;
mod settings;

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("signpost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Navigation and sidebar configuration for static documentation sites")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(cmd::check::make_subcommand())
        .subcommand(cmd::dump::make_subcommand())
        .subcommand(cmd::sidebar::make_subcommand())
        .subcommand(cmd::export::make_subcommand())
}

fn main() {
    let matches = cli().get_matches();

    // --verbose enables DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match matches.subcommand() {
        Some(("check", args)) => cmd::check::execute(args),
        Some(("dump", args)) => cmd::dump::execute(args),
        Some(("sidebar", args)) => cmd::sidebar::execute(args),
        Some(("export", args)) => cmd::export::execute(args),
        _ => unreachable!("a subcommand is required"),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let matches = cli()
            .try_get_matches_from(["signpost", "sidebar", "/linux/", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }
}
