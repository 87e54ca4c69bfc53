use crate::config::{Link, NavEntry, SiteConfig, default_base_path};
use crate::sidebar::{SidebarGroup, Sidebars};
use crate::validate::{self, Issue, IssueKind, ValidationErrors};
use tracing::warn;

/// Assembles a [`SiteConfig`] and validates it on [`build`](Self::build).
///
/// ```
/// use signpost_core::{SidebarGroup, SiteConfig};
///
/// let config = SiteConfig::builder()
///     .title("My Blog")
///     .nav("Home", "/")
///     .nav("Linux", "/linux/")
///     .sidebar("/linux/", [SidebarGroup::new("Linux").item("ls", "/linux/ls/")])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.nav[1].link, "/linux/");
/// ```
#[derive(Debug)]
pub struct SiteConfigBuilder {
    title: String,
    description: String,
    stylesheets: Vec<String>,
    base_path: String,
    nav: Vec<NavEntry>,
    sidebars: Vec<(String, Vec<SidebarGroup>)>,
}

impl Default for SiteConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteConfigBuilder {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            stylesheets: Vec::new(),
            base_path: default_base_path(),
            nav: Vec::new(),
            sidebars: Vec::new(),
        }
    }

    // Identity
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    // Presentation
    pub fn stylesheet<S: Into<String>>(mut self, href: S) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn base_path<S: Into<String>>(mut self, base: S) -> Self {
        self.base_path = base.into();
        self
    }

    // Navigation
    pub fn nav<L: Into<String>, P: Into<String>>(mut self, label: L, link: P) -> Self {
        self.nav.push(Link::new(label, link));
        self
    }

    pub fn nav_entries<I: IntoIterator<Item = NavEntry>>(mut self, entries: I) -> Self {
        self.nav.extend(entries);
        self
    }

    /// Declare the sidebar for a path prefix. Declaring the same prefix
    /// twice fails the build.
    pub fn sidebar<S, I>(mut self, prefix: S, groups: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = SidebarGroup>,
    {
        self.sidebars
            .push((prefix.into(), groups.into_iter().collect()));
        self
    }

    pub fn build(self) -> Result<SiteConfig, ValidationErrors> {
        let mut duplicates = Vec::new();
        let mut sidebars = Sidebars::new();
        for (prefix, groups) in self.sidebars {
            if sidebars.contains(&prefix) {
                duplicates.push(Issue::new(
                    format!("sidebars[{prefix:?}]"),
                    IssueKind::DuplicatePrefix,
                ));
                continue;
            }
            sidebars.insert(prefix, groups);
        }

        let config = SiteConfig {
            title: self.title,
            description: self.description,
            stylesheets: self.stylesheets,
            base_path: self.base_path,
            nav: self.nav,
            sidebars,
        };

        let mut issues = validate::collect(&config);
        issues.extend(duplicates);
        if issues.is_empty() {
            Ok(config)
        } else {
            warn!(issues = issues.len(), "site configuration builder rejected the document");
            Err(ValidationErrors::new(issues))
        }
    }
}
