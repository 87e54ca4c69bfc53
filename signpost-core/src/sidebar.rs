//! Path-scoped sidebars.
//!
//! Each sidebar is keyed by a path prefix such as `/java/`. A page gets the
//! sidebar whose prefix its path starts with; the longest matching prefix
//! wins when several apply.

use std::{borrow::Cow, fmt};

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, Visitor},
};

use crate::config::Link;

pub type SidebarItem = Link;

/// A headed list of links inside a sidebar.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroup {
    #[serde(alias = "text")]
    pub heading: String,
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    pub fn new<S: Into<String>>(heading: S) -> Self {
        Self {
            heading: heading.into(),
            items: Vec::new(),
        }
    }

    pub fn item<L: Into<String>, P: Into<String>>(mut self, label: L, link: P) -> Self {
        self.items.push(Link::new(label, link));
        self
    }
}

/// Sidebars keyed by path prefix, in the order they were declared.
///
/// Equality is order-sensitive. Deserializing rejects a prefix that appears
/// twice.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct Sidebars(IndexMap<String, Vec<SidebarGroup>>);

impl Sidebars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sidebar, returning the groups previously stored under the
    /// same prefix.
    pub fn insert<S: Into<String>>(
        &mut self,
        prefix: S,
        groups: Vec<SidebarGroup>,
    ) -> Option<Vec<SidebarGroup>> {
        self.0.insert(prefix.into(), groups)
    }

    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    /// Number of groups declared under a prefix, zero when it has no sidebar.
    pub fn groups(&self, prefix: &str) -> usize {
        self.0.get(prefix).map_or(0, Vec::len)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.0.contains_key(prefix)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.0
            .iter()
            .map(|(prefix, groups)| (prefix.as_str(), groups.as_slice()))
    }

    /// Find the sidebar for a page path.
    ///
    /// A path missing its leading slash is treated as if it had one, and
    /// `/java` selects the `/java/` sidebar.
    pub fn lookup(&self, path: &str) -> Option<(&str, &[SidebarGroup])> {
        let path: Cow<'_, str> = if path.starts_with('/') {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("/{path}"))
        };

        self.iter()
            .filter(|(prefix, _)| {
                path.starts_with(prefix)
                    || prefix.strip_suffix('/').is_some_and(|bare| *path == *bare)
            })
            .max_by_key(|(prefix, _)| prefix.len())
    }
}

impl PartialEq for Sidebars {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Sidebars {}

impl FromIterator<(String, Vec<SidebarGroup>)> for Sidebars {
    fn from_iter<I: IntoIterator<Item = (String, Vec<SidebarGroup>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Sidebars {
    type Item = (String, Vec<SidebarGroup>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<SidebarGroup>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for Sidebars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SidebarsVisitor)
    }
}

struct SidebarsVisitor;

impl<'de> Visitor<'de> for SidebarsVisitor {
    type Value = Sidebars;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of path prefixes to sidebar groups")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut sidebars = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((prefix, groups)) = access.next_entry::<String, Vec<SidebarGroup>>()? {
            if sidebars.contains_key(&prefix) {
                return Err(de::Error::custom(format_args!(
                    "duplicate sidebar prefix `{prefix}`"
                )));
            }
            sidebars.insert(prefix, groups);
        }
        Ok(Sidebars(sidebars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebars() -> Sidebars {
        let mut sidebars = Sidebars::new();
        sidebars.insert("/java/", vec![SidebarGroup::new("Java").item("Java", "/java/")]);
        sidebars.insert(
            "/java/springboot/",
            vec![SidebarGroup::new("Spring Boot").item("Spring Boot", "/java/springboot/")],
        );
        sidebars.insert("/数据库/", vec![SidebarGroup::new("数据库").item("MySQL", "/数据库/mysql/")]);
        sidebars
    }

    #[test]
    fn test_lookup_longest_prefix_wins() {
        let sidebars = sidebars();

        let (prefix, groups) = sidebars.lookup("/java/springboot/logging/").unwrap();
        assert_eq!(prefix, "/java/springboot/");
        assert_eq!(groups[0].heading, "Spring Boot");

        let (prefix, _) = sidebars.lookup("/java/jfinal/").unwrap();
        assert_eq!(prefix, "/java/");
    }

    #[test]
    fn test_lookup_normalizes_path() {
        let sidebars = sidebars();
        assert_eq!(sidebars.lookup("java/cache/").unwrap().0, "/java/");
        assert_eq!(sidebars.lookup("/java").unwrap().0, "/java/");
        assert_eq!(sidebars.lookup("/数据库/mysql/").unwrap().0, "/数据库/");
    }

    #[test]
    fn test_lookup_without_match() {
        let sidebars = sidebars();
        assert!(sidebars.lookup("/").is_none());
        assert!(sidebars.lookup("/javascript/").is_none());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let prefixes: Vec<_> = sidebars().prefixes().map(str::to_owned).collect();
        assert_eq!(prefixes, ["/java/", "/java/springboot/", "/数据库/"]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: Sidebars = [
            ("/a/".to_string(), Vec::new()),
            ("/b/".to_string(), Vec::new()),
        ]
        .into_iter()
        .collect();
        let b: Sidebars = [
            ("/b/".to_string(), Vec::new()),
            ("/a/".to_string(), Vec::new()),
        ]
        .into_iter()
        .collect();

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_insert_returns_replaced_groups() {
        let mut sidebars = sidebars();
        let previous = sidebars.insert("/java/", Vec::new()).unwrap();
        assert_eq!(previous[0].heading, "Java");
        assert_eq!(sidebars.len(), 3);
        assert!(sidebars.get("/java/").unwrap().is_empty());
    }

    #[test]
    fn test_group_count() {
        let mut sidebars = sidebars();
        sidebars.insert(
            "/java/",
            vec![SidebarGroup::new("Java"), SidebarGroup::new("JFinal")],
        );

        assert_eq!(sidebars.groups("/java/"), 2);
        assert_eq!(sidebars.groups("/数据库/"), 1);
        assert_eq!(sidebars.groups("/nginx/"), 0);
    }

    #[test]
    fn test_group_builder() {
        let group = SidebarGroup::new("Linux")
            .item("cat 命令", "/linux/cat/")
            .item("cd 命令", "/linux/cd/");
        assert_eq!(group.items.len(), 2);
        assert_eq!(group.items[1].link, "/linux/cd/");
    }
}
