//! Typed navigation configuration for a static documentation site.
//!
//! A [`SiteConfig`] holds the site's identity, stylesheet references, base
//! path, the top navigation bar and a set of sidebars keyed by path prefix.
//! It can be built in code with [`SiteConfigBuilder`], read from TOML or JSON,
//! validated, and exported in the shape VitePress expects.

pub mod builder;
pub mod config;
pub mod sidebar;
pub mod validate;
pub mod vitepress;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use builder::SiteConfigBuilder;
pub use config::{ConfigError, Format, Link, NavEntry, SiteConfig};
pub use sidebar::{SidebarGroup, SidebarItem, Sidebars};
pub use validate::{Issue, IssueKind, ValidationErrors};
pub use vitepress::VitePressConfig;
