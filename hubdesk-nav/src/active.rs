//! Active-path resolution: which menu item matches the current location.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

use crate::catalog::hub_root;
use crate::model::{Item, MenuTree};

/// Decoded query parameters. The first occurrence of a key wins.
pub type Query = BTreeMap<String, String>;

/// Current location as reported by the host's router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Query,
}

impl Location {
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Parse a relative URL such as `/inbox?bucket=mine#top`.
    pub fn parse(url: &str) -> Self {
        let without_fragment = url.split('#').next().unwrap_or_default();
        let (path, query) = split_href(without_fragment);
        Self {
            path: path.to_string(),
            query: query.map(parse_query).unwrap_or_default(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if self.query.is_empty() {
            return Ok(());
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish();
        write!(f, "?{encoded}")
    }
}

/// Split an href into its path and optional raw query string.
pub fn split_href(href: &str) -> (&str, Option<&str>) {
    match href.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (href, None),
    }
}

/// Decode an `application/x-www-form-urlencoded` query string.
pub fn parse_query(raw: &str) -> Query {
    let mut query = Query::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        query.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    query
}

/// Position of the active item inside a [`MenuTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveItem {
    pub section: usize,
    pub item: usize,
}

/// Matches item hrefs against a location for one hub.
#[derive(Debug, Clone, Default)]
pub struct ActivePathResolver {
    hub_root: Option<String>,
}

impl ActivePathResolver {
    /// `hub_id` enables the exact-match rule for the hub root item.
    pub fn new(hub_id: Option<&str>) -> Self {
        Self {
            hub_root: hub_id.map(hub_root),
        }
    }

    /// Return whether `href` is active for `path` and `query`.
    pub fn is_active(
        &self,
        href: Option<&str>,
        path: &str,
        query: &Query,
    ) -> bool {
        let Some(href) = href.filter(|href| !href.is_empty()) else {
            return false;
        };

        match split_href(href) {
            (item_path, Some(item_query)) => {
                path_matches(item_path, path)
                    && parse_query(item_query).iter().all(|(key, value)| {
                        query.get(key).is_some_and(|current| current == value)
                    })
            },
            (item_path, None) => {
                if self.hub_root.as_deref() == Some(item_path) {
                    path == item_path
                } else {
                    path_matches(item_path, path)
                }
            },
        }
    }

    /// Convenience wrapper over [`ActivePathResolver::is_active`].
    pub fn is_item_active(&self, item: &Item, location: &Location) -> bool {
        self.is_active(item.href.as_deref(), location.path(), location.query())
    }

    /// First matching item, scanning sections then items in declared order.
    pub fn find_active(
        &self,
        tree: &MenuTree,
        location: &Location,
    ) -> Option<ActiveItem> {
        tree.sections()
            .iter()
            .enumerate()
            .find_map(|(section_index, section)| {
                section
                    .items
                    .iter()
                    .position(|item| self.is_item_active(item, location))
                    .map(|item_index| ActiveItem {
                        section: section_index,
                        item: item_index,
                    })
            })
    }

    /// Id of the first section containing an active item.
    pub fn find_active_section_id<'t>(
        &self,
        tree: &'t MenuTree,
        location: &Location,
    ) -> Option<&'t str> {
        self.find_active(tree, location)
            .map(|active| tree.sections()[active.section].id.as_str())
    }
}

fn path_matches(item_path: &str, current_path: &str) -> bool {
    current_path == item_path || current_path.starts_with(item_path)
}
