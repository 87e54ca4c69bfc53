//! Construction-time checks for a [`SiteConfig`].
//!
//! Validation is structural only. Whether a link points at a page that
//! actually exists is up to the content tree, so it is never checked here.

use std::fmt;

use crate::config::{Link, SiteConfig};

/// What is wrong with one field of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    EmptyTitle,
    EmptyLabel,
    EmptyLink,
    RelativeLink,
    WhitespaceInLink,
    InvalidPrefix,
    DuplicatePrefix,
    EmptyGroup,
    InvalidBasePath,
    EmptyStylesheet,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            IssueKind::EmptyTitle => "title cannot be empty",
            IssueKind::EmptyLabel => "label cannot be empty",
            IssueKind::EmptyLink => "link cannot be empty",
            IssueKind::RelativeLink => "link must start with `/`",
            IssueKind::WhitespaceInLink => "link cannot contain whitespace",
            IssueKind::InvalidPrefix => "sidebar prefix must start with `/`",
            IssueKind::DuplicatePrefix => "sidebar prefix is declared more than once",
            IssueKind::EmptyGroup => "sidebar group has no items",
            IssueKind::InvalidBasePath => "base path must start and end with `/`",
            IssueKind::EmptyStylesheet => "stylesheet reference cannot be empty",
        };
        f.write_str(message)
    }
}

/// A single problem, located by its path inside the document
/// (e.g. `nav[2].link`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub location: String,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new<S: Into<String>>(location: S, kind: IssueKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// Every issue found in a document.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

impl ValidationErrors {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }
}

fn summarize(issues: &[Issue]) -> String {
    let noun = if issues.len() == 1 { "issue" } else { "issues" };
    let mut out = format!("{} configuration {noun}", issues.len());
    for issue in issues {
        out.push_str("\n  ");
        out.push_str(&issue.to_string());
    }
    out
}

pub(crate) fn collect(config: &SiteConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    if config.title.trim().is_empty() {
        issues.push(Issue::new("title", IssueKind::EmptyTitle));
    }

    let base = &config.base_path;
    if !base.starts_with('/') || !base.ends_with('/') {
        issues.push(Issue::new("basePath", IssueKind::InvalidBasePath));
    }

    for (i, stylesheet) in config.stylesheets.iter().enumerate() {
        if stylesheet.trim().is_empty() {
            issues.push(Issue::new(
                format!("stylesheets[{i}]"),
                IssueKind::EmptyStylesheet,
            ));
        }
    }

    for (i, entry) in config.nav.iter().enumerate() {
        check_link(&mut issues, &format!("nav[{i}]"), entry);
    }

    for (prefix, groups) in config.sidebars.iter() {
        let at = format!("sidebars[{prefix:?}]");
        if !prefix.starts_with('/') {
            issues.push(Issue::new(at.clone(), IssueKind::InvalidPrefix));
        }

        for (g, group) in groups.iter().enumerate() {
            let at = format!("{at}[{g}]");
            if group.heading.trim().is_empty() {
                issues.push(Issue::new(format!("{at}.heading"), IssueKind::EmptyLabel));
            }
            if group.items.is_empty() {
                issues.push(Issue::new(at.clone(), IssueKind::EmptyGroup));
            }
            for (n, item) in group.items.iter().enumerate() {
                check_link(&mut issues, &format!("{at}.items[{n}]"), item);
            }
        }
    }

    issues
}

fn check_link(issues: &mut Vec<Issue>, at: &str, entry: &Link) {
    if entry.label.trim().is_empty() {
        issues.push(Issue::new(format!("{at}.label"), IssueKind::EmptyLabel));
    }
    if let Some(kind) = link_issue(&entry.link) {
        issues.push(Issue::new(format!("{at}.link"), kind));
    }
}

fn link_issue(link: &str) -> Option<IssueKind> {
    if link.is_empty() {
        Some(IssueKind::EmptyLink)
    } else if !link.starts_with('/') {
        Some(IssueKind::RelativeLink)
    } else if link.chars().any(char::is_whitespace) {
        Some(IssueKind::WhitespaceInLink)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::SidebarGroup;
    use pretty_assertions::assert_eq;

    fn valid() -> SiteConfig {
        SiteConfig::builder()
            .title("Notes")
            .nav("Home", "/")
            .sidebar("/linux/", [SidebarGroup::new("Linux").item("ls", "/linux/ls/")])
            .build()
            .unwrap()
    }

    fn issues(config: &SiteConfig) -> Vec<Issue> {
        config.validate().map(|_| Vec::new()).unwrap_or_else(|e| e.issues().to_vec())
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_title() {
        let mut config = valid();
        config.title = "  ".to_string();
        assert_eq!(issues(&config), vec![Issue::new("title", IssueKind::EmptyTitle)]);
    }

    #[test]
    fn test_nav_link_problems() {
        let mut config = valid();
        config.nav = vec![
            Link::new("Empty", ""),
            Link::new("Relative", "java/"),
            Link::new("Spaced", "/java/spring boot/"),
            Link::new("", "/ok/"),
        ];

        assert_eq!(
            issues(&config),
            vec![
                Issue::new("nav[0].link", IssueKind::EmptyLink),
                Issue::new("nav[1].link", IssueKind::RelativeLink),
                Issue::new("nav[2].link", IssueKind::WhitespaceInLink),
                Issue::new("nav[3].label", IssueKind::EmptyLabel),
            ]
        );
    }

    #[test]
    fn test_sidebar_problems() {
        let mut config = valid();
        config.sidebars.insert(
            "ai/",
            vec![
                SidebarGroup::new(""),
                SidebarGroup::new("AI").item("Chat", "ai/chat/"),
            ],
        );

        assert_eq!(
            issues(&config),
            vec![
                Issue::new(r#"sidebars["ai/"]"#, IssueKind::InvalidPrefix),
                Issue::new(r#"sidebars["ai/"][0].heading"#, IssueKind::EmptyLabel),
                Issue::new(r#"sidebars["ai/"][0]"#, IssueKind::EmptyGroup),
                Issue::new(r#"sidebars["ai/"][1].items[0].link"#, IssueKind::RelativeLink),
            ]
        );
    }

    #[test]
    fn test_base_path_and_stylesheets() {
        let mut config = valid();
        config.base_path = "/docs".to_string();
        config.stylesheets = vec!["/style.css".to_string(), String::new()];

        assert_eq!(
            issues(&config),
            vec![
                Issue::new("basePath", IssueKind::InvalidBasePath),
                Issue::new("stylesheets[1]", IssueKind::EmptyStylesheet),
            ]
        );
    }

    #[test]
    fn test_error_message_lists_every_issue() {
        let mut config = valid();
        config.title = String::new();
        config.nav[0].link = String::new();

        let err = config.validate().unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.has(IssueKind::EmptyLink));
        assert_eq!(
            err.to_string(),
            "2 configuration issues\n  title: title cannot be empty\n  nav[0].link: link cannot be empty"
        );
    }
}
