use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use signpost_core::SiteConfig;
use std::path::Path;
use tracing::info;

use super::{add_document_args, load_document};

pub fn make_subcommand() -> Command {
    add_document_args(Command::new("export"))
        .about("Export the document as VitePress configuration")
        .arg(
            Arg::new("wrap")
                .long("wrap")
                .help("Emit a complete config.mts module instead of bare JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write to a file instead of stdout"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_document(args)?;
    let rendered = render(&config, args.get_flag("wrap"))?;

    match args.get_one::<String>("output") {
        Some(output) => {
            let output = Path::new(output);
            std::fs::write(output, &rendered)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(path = %output.display(), "wrote VitePress configuration");
            println!("Exported configuration to {}", output.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render(config: &SiteConfig, wrap: bool) -> Result<String> {
    if wrap {
        return Ok(config.to_vitepress_module()?);
    }
    let mut json = config.to_vitepress_json()?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SiteConfig {
        SiteConfig::builder()
            .title("Notes")
            .nav("Home", "/")
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), false).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"themeConfig\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_render_module() {
        let module = render(&sample(), true).unwrap();
        assert!(module.starts_with("import { defineConfig } from 'vitepress'"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("signpost.toml");
        let output = dir.path().join("config.mts");
        sample().write(&source).unwrap();

        let matches = make_subcommand()
            .try_get_matches_from([
                "export",
                "--config",
                source.to_str().unwrap(),
                "--wrap",
                "--output",
                output.to_str().unwrap(),
            ])
            .unwrap();
        execute(&matches).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("export default defineConfig({"));
        assert!(written.contains("\"text\": \"Home\""));
    }
}
