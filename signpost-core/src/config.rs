//! The site configuration document and its file formats.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::sidebar::{SidebarGroup, Sidebars};
use crate::validate::{self, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parsing(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serializing(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
}

/// Structured formats the document can be stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Toml => write!(f, "toml"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// A labeled link. Used for top navigation entries and sidebar items.
///
/// Documents written for the site framework call the label `text`, so that
/// spelling is accepted when reading.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    #[serde(alias = "text")]
    pub label: String,
    pub link: String,
}

impl Link {
    pub fn new<L: Into<String>, P: Into<String>>(label: L, link: P) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

pub type NavEntry = Link;

/// Site identity, presentation, top navigation and path-scoped sidebars.
///
/// Built once and handed to the site framework; nothing here mutates it
/// afterwards.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stylesheets: Vec<String>,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Top navigation, in left-to-right display order.
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    #[serde(default, skip_serializing_if = "Sidebars::is_empty")]
    pub sidebars: Sidebars,
}

pub(crate) fn default_base_path() -> String {
    "/".to_string()
}

impl SiteConfig {
    pub fn builder() -> crate::builder::SiteConfigBuilder {
        crate::builder::SiteConfigBuilder::new()
    }

    /// Read a document without validating it. The format follows the
    /// file extension.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let format = Format::from_path(path)?;
        let data = std::fs::read_to_string(path)?;
        let config = Self::parse(&data, format)?;
        debug!(
            path = %path.display(),
            nav = config.nav.len(),
            sidebars = config.sidebars.len(),
            "read site configuration"
        );

        Ok(config)
    }

    /// Read a document and reject it if it has any issues.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(data: &str, format: Format) -> Result<Self, ConfigError> {
        let config = match format {
            Format::Toml => toml::from_str(data)?,
            Format::Json => serde_json::from_str(data)?,
        };
        Ok(config)
    }

    pub fn encode(&self, format: Format) -> Result<String, ConfigError> {
        let data = match format {
            Format::Toml => toml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(data)
    }

    /// Write the document in the format matching the file extension.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let data = self.encode(Format::from_path(path)?)?;
        std::fs::write(path, data)?;
        debug!(path = %path.display(), "wrote site configuration");
        Ok(())
    }

    /// Check every construction constraint, reporting all issues at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let issues = validate::collect(self);
        if issues.is_empty() {
            return Ok(());
        }

        warn!(issues = issues.len(), "site configuration is invalid");
        Err(ValidationErrors::new(issues))
    }

    /// The sidebar shown for a page path, with the prefix that selected it.
    pub fn sidebar_for(&self, path: &str) -> Option<(&str, &[SidebarGroup])> {
        self.sidebars.lookup(path)
    }

    /// Prepend the base path to a site-relative link.
    ///
    /// Links that don't start with `/` are returned unchanged.
    pub fn with_base(&self, link: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() || !link.starts_with('/') {
            return link.to_string();
        }
        format!("{base}{link}")
    }

    /// Number of links across the top navigation and all sidebars.
    pub fn link_count(&self) -> usize {
        let items: usize = self
            .sidebars
            .iter()
            .flat_map(|(_, groups)| groups)
            .map(|group| group.items.len())
            .sum();
        self.nav.len() + items
    }
}
