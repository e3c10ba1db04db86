//! Sidebar registry: loading, lookup, and consistency checking.
//!
//! [`SidebarRegistry`] holds the named sidebar trees and the permalink
//! index from one generated payload. It is built once at process start
//! and then shared read-only; there is no interior mutability, so it can
//! live in an `Arc` or `OnceLock` without locking.

use std::borrow::Cow;
use std::collections::HashMap;

use sidenav_model::{SidebarItem, SidebarTree};

use crate::bundle;
use crate::error::LoadError;
use crate::payload::SidebarPayload;

/// Link hrefs of one sidebar that the permalink index does not map back
/// to that sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsistencyGap {
    /// Sidebar name.
    pub sidebar: String,
    /// Link hrefs missing from the index (or mapped to another sidebar).
    pub missing_hrefs: Vec<String>,
}

/// Immutable registry of named sidebars and the permalink index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarRegistry {
    sidebars: HashMap<String, SidebarTree>,
    permalink_index: HashMap<String, String>,
}

impl SidebarRegistry {
    /// Load a registry from a generated payload.
    ///
    /// Accepts either the bare JSON document or the module chunk the
    /// generator wraps it in (`JSON.parse('…')` inside webpack
    /// boilerplate).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the payload is not valid UTF-8/JSON, if
    /// an item is missing its `type` discriminator or a required field,
    /// or if a sidebar's top-level array contains a non-category item.
    /// Malformed payloads are unrecoverable; there is no partial load.
    pub fn load(raw: &[u8]) -> Result<Self, LoadError> {
        let text = std::str::from_utf8(raw)?;

        let json = if bundle::is_bare_json(text) {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(bundle::extract_payload(text)?)
        };

        let payload: SidebarPayload = serde_json::from_str(&json)?;
        let registry = Self::from_payload(payload)?;

        for gap in registry.check_consistency() {
            tracing::warn!(
                sidebar = %gap.sidebar,
                missing = gap.missing_hrefs.len(),
                "Sidebar links missing from permalink index"
            );
        }
        tracing::debug!(
            sidebar_count = registry.sidebars.len(),
            permalink_count = registry.permalink_index.len(),
            "Sidebar registry loaded"
        );

        Ok(registry)
    }

    /// Validate sidebar roots and assemble the registry.
    fn from_payload(payload: SidebarPayload) -> Result<Self, LoadError> {
        let mut sidebars = HashMap::with_capacity(payload.docs_sidebars.len());

        for (name, items) in payload.docs_sidebars {
            let mut categories = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    SidebarItem::Category(category) => categories.push(category),
                    SidebarItem::Link(_) => {
                        return Err(LoadError::RootNotCategory { sidebar: name });
                    }
                }
            }
            sidebars.insert(name, SidebarTree::new(categories));
        }

        Ok(Self {
            sidebars,
            permalink_index: payload.permalink_to_sidebar,
        })
    }

    /// Get a sidebar tree by name.
    #[must_use]
    pub fn sidebar(&self, name: &str) -> Option<&SidebarTree> {
        self.sidebars.get(name)
    }

    /// Names of all known sidebars, sorted for deterministic iteration.
    #[must_use]
    pub fn sidebar_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.sidebars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up which sidebar is active for a page path.
    ///
    /// Exact match only; no normalization or prefix matching.
    #[must_use]
    pub fn lookup_sidebar(&self, path: &str) -> Option<&str> {
        self.permalink_index.get(path).map(String::as_str)
    }

    /// Find link hrefs whose permalink entry is missing or points at a
    /// different sidebar.
    ///
    /// Generator output should keep the tree and the index in sync; this
    /// is logged as a warning during [`load`](Self::load) and exposed
    /// here so generator test suites can assert emptiness.
    #[must_use]
    pub fn check_consistency(&self) -> Vec<ConsistencyGap> {
        let mut gaps = Vec::new();

        for name in self.sidebar_names() {
            let tree = &self.sidebars[name];
            let missing_hrefs: Vec<String> = tree
                .link_hrefs()
                .into_iter()
                .filter(|href| self.lookup_sidebar(href) != Some(name))
                .map(str::to_owned)
                .collect();

            if !missing_hrefs.is_empty() {
                gaps.push(ConsistencyGap {
                    sidebar: name.to_owned(),
                    missing_hrefs,
                });
            }
        }

        gaps
    }
}
