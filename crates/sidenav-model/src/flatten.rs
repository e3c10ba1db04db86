//! Presentation flattening for sidebar trees.
//!
//! UI layers render a sidebar as a flat list of indented rows. The
//! flattening is a pre-order traversal: each category contributes a
//! header row (no href) at its depth, followed by its items one level
//! deeper. Declaration order is preserved exactly.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::tree::{Category, SidebarItem, SidebarTree};

/// One flattened presentation row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlatEntry {
    /// Nesting depth (top-level categories are 0).
    pub depth: usize,
    /// Display label.
    pub label: String,
    /// Link target, `None` for category headers.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub href: Option<String>,
}

impl SidebarTree {
    /// Flatten the tree into presentation rows via pre-order traversal.
    ///
    /// A pure function of the tree: calling it twice yields the same
    /// sequence.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatEntry> {
        let mut entries = Vec::new();
        for category in self.categories() {
            flatten_category(category, 0, &mut entries);
        }
        entries
    }
}

/// Emit a category header, then its items one level deeper.
fn flatten_category(category: &Category, depth: usize, out: &mut Vec<FlatEntry>) {
    out.push(FlatEntry {
        depth,
        label: category.label.clone(),
        href: None,
    });

    for item in &category.items {
        match item {
            SidebarItem::Link(link) => out.push(FlatEntry {
                depth: depth + 1,
                label: link.label.clone(),
                href: Some(link.href.clone()),
            }),
            SidebarItem::Category(nested) => flatten_category(nested, depth + 1, out),
        }
    }
}
