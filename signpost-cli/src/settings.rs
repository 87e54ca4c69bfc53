use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, Map};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name searched for when no document path is given.
pub const DEFAULT_FILENAME: &str = "signpost.toml";

/// CLI settings merged from defaults, env vars and arguments
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the site configuration document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    /// Output format for `dump`
    pub format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: None,
            format: "json".to_string(),
        }
    }
}

impl Settings {
    /// Load settings with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (SIGNPOST_*)
    /// 3. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        Self::load_with_env(args, None)
    }

    /// Same as [`Settings::load`], reading variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(args: &ArgMatches, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(ConfigBuilder::try_from(&defaults)?);

        // 2. Add environment variables with SIGNPOST_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SIGNPOST")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        // 3. Override with CLI arguments that are defined for this command
        let mut cli_overrides = HashMap::new();
        if let Some(config) = args.try_get_one::<String>("config").unwrap_or(None) {
            cli_overrides.insert("config".to_string(), config.clone());
        }
        if let Some(format) = args.try_get_one::<String>("format").unwrap_or(None) {
            cli_overrides.insert("format".to_string(), format.clone());
        }
        if !cli_overrides.is_empty() {
            builder = builder.add_source(ConfigBuilder::try_from(&cli_overrides)?);
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// The document to operate on: the configured path, or the nearest
    /// `signpost.toml` in the working directory or its parents.
    pub fn document_path(&self) -> PathBuf {
        if let Some(path) = &self.config {
            return PathBuf::from(path);
        }

        std::env::current_dir()
            .ok()
            .and_then(|cwd| discover(&cwd))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME))
    }
}

/// Search `start` and its ancestors for the default document.
pub fn discover(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(DEFAULT_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
