//! Export to the shape VitePress reads from `.vitepress/config.mts`.
//!
//! The site framework names things differently (`text` for every label,
//! `base` and `css` at the top level, navigation under `themeConfig`), so the
//! document is converted to these types before being handed over.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{Link, SiteConfig};
use crate::sidebar::{SidebarGroup, Sidebars};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VitePressConfig {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,
    pub base: String,
    pub theme_config: ThemeConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub sidebar: IndexMap<String, Vec<SidebarSection>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    pub text: String,
    pub items: Vec<NavItem>,
}

impl From<&Link> for NavItem {
    fn from(link: &Link) -> Self {
        Self {
            text: link.label.clone(),
            link: link.link.clone(),
        }
    }
}

impl From<NavItem> for Link {
    fn from(item: NavItem) -> Self {
        Link::new(item.text, item.link)
    }
}

impl From<&SidebarGroup> for SidebarSection {
    fn from(group: &SidebarGroup) -> Self {
        Self {
            text: group.heading.clone(),
            items: group.items.iter().map(NavItem::from).collect(),
        }
    }
}

impl From<SidebarSection> for SidebarGroup {
    fn from(section: SidebarSection) -> Self {
        Self {
            heading: section.text,
            items: section.items.into_iter().map(Link::from).collect(),
        }
    }
}

impl From<&SiteConfig> for VitePressConfig {
    fn from(config: &SiteConfig) -> Self {
        let sidebar: IndexMap<String, Vec<SidebarSection>> = config
            .sidebars
            .iter()
            .map(|(prefix, groups)| {
                (
                    prefix.to_string(),
                    groups.iter().map(SidebarSection::from).collect(),
                )
            })
            .collect();

        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            css: config.stylesheets.clone(),
            base: config.base_path.clone(),
            theme_config: ThemeConfig {
                nav: config.nav.iter().map(NavItem::from).collect(),
                sidebar,
            },
        }
    }
}

impl From<VitePressConfig> for SiteConfig {
    fn from(config: VitePressConfig) -> Self {
        let sidebars: Sidebars = config
            .theme_config
            .sidebar
            .into_iter()
            .map(|(prefix, sections)| {
                (prefix, sections.into_iter().map(SidebarGroup::from).collect())
            })
            .collect();

        Self {
            title: config.title,
            description: config.description,
            stylesheets: config.css,
            base_path: config.base,
            nav: config.theme_config.nav.into_iter().map(Link::from).collect(),
            sidebars,
        }
    }
}

impl SiteConfig {
    /// The document as pretty JSON in the framework's shape.
    pub fn to_vitepress_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&VitePressConfig::from(self))
    }

    /// A complete `config.mts` module wrapping the framework-shaped JSON.
    pub fn to_vitepress_module(&self) -> Result<String, serde_json::Error> {
        let json = self.to_vitepress_json()?;
        Ok(format!(
            "import {{ defineConfig }} from 'vitepress'\n\nexport default defineConfig({json})\n"
        ))
    }
}
