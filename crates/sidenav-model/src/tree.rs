//! Sidebar tree data types.
//!
//! A sidebar is an ordered sequence of labeled categories; each category
//! holds an ordered sequence of items, where an item is either a link to
//! one documentation page or a nested category.
//!
//! On the wire each item carries a `type` discriminator (`"link"` or
//! `"category"`), which maps onto [`SidebarItem`] as an internally tagged
//! enum when the `serde` feature is enabled.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Leaf navigation entry pointing at one documentation page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Link {
    /// Display label.
    pub label: String,
    /// Link target path.
    pub href: String,
}

/// Labeled grouping node containing child items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Child items in declaration order.
    pub items: Vec<SidebarItem>,
}

/// A single entry in a sidebar tree.
///
/// Wire representation uses the `type` field as discriminator:
/// `{"type": "link", ...}` or `{"type": "category", ...}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum SidebarItem {
    /// Link to a documentation page.
    Link(Link),
    /// Nested category.
    Category(Category),
}

/// A named sidebar's navigation tree: an ordered sequence of categories.
///
/// Immutable after construction. The tree only stores structure and
/// labels; which sidebar is active for a given page is tracked by the
/// permalink index in `sidenav-registry`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarTree {
    categories: Vec<Category>,
}

impl SidebarTree {
    /// Create a tree from top-level categories.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Top-level categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// True if the tree has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// All link hrefs in the tree, in pre-order.
    ///
    /// Category labels are not included; only leaf links target pages.
    #[must_use]
    pub fn link_hrefs(&self) -> Vec<&str> {
        fn collect<'a>(items: &'a [SidebarItem], out: &mut Vec<&'a str>) {
            for item in items {
                match item {
                    SidebarItem::Link(link) => out.push(&link.href),
                    SidebarItem::Category(category) => collect(&category.items, out),
                }
            }
        }

        let mut hrefs = Vec::new();
        for category in &self.categories {
            collect(&category.items, &mut hrefs);
        }
        hrefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SidebarTree {
        SidebarTree::new(vec![
            Category {
                label: "Guide".to_owned(),
                items: vec![
                    SidebarItem::Link(Link {
                        label: "Install".to_owned(),
                        href: "/docs/install".to_owned(),
                    }),
                    SidebarItem::Category(Category {
                        label: "Advanced".to_owned(),
                        items: vec![SidebarItem::Link(Link {
                            label: "Tuning".to_owned(),
                            href: "/docs/tuning".to_owned(),
                        })],
                    }),
                ],
            },
            Category {
                label: "API".to_owned(),
                items: vec![SidebarItem::Link(Link {
                    label: "Reference".to_owned(),
                    href: "/docs/api".to_owned(),
                })],
            },
        ])
    }

    #[test]
    fn test_empty_tree_is_empty() {
        let tree = SidebarTree::default();

        assert!(tree.is_empty());
        assert!(tree.categories().is_empty());
        assert!(tree.link_hrefs().is_empty());
    }

    #[test]
    fn test_categories_preserve_order() {
        let tree = sample_tree();

        let labels: Vec<_> = tree
            .categories()
            .iter()
            .map(|c| c.label.as_str())
            .collect();

        assert_eq!(labels, vec!["Guide", "API"]);
    }

    #[test]
    fn test_link_hrefs_pre_order() {
        let tree = sample_tree();

        let hrefs = tree.link_hrefs();

        assert_eq!(hrefs, vec!["/docs/install", "/docs/tuning", "/docs/api"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_item_deserializes_tagged_link() {
        let json = r#"{"type": "link", "label": "Install", "href": "/docs/install"}"#;

        let item: SidebarItem = serde_json::from_str(json).unwrap();

        assert_eq!(
            item,
            SidebarItem::Link(Link {
                label: "Install".to_owned(),
                href: "/docs/install".to_owned(),
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_item_deserializes_nested_category() {
        let json = r#"{
            "type": "category",
            "label": "Guide",
            "items": [{"type": "link", "label": "Install", "href": "/docs/install"}]
        }"#;

        let item: SidebarItem = serde_json::from_str(json).unwrap();

        let SidebarItem::Category(category) = item else {
            panic!("expected category");
        };
        assert_eq!(category.label, "Guide");
        assert_eq!(category.items.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_item_missing_type_fails() {
        let json = r#"{"label": "Install", "href": "/docs/install"}"#;

        let result: Result<SidebarItem, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_category_missing_items_fails() {
        let json = r#"{"type": "category", "label": "Guide"}"#;

        let result: Result<SidebarItem, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
