//! Wire format for the generated sidebar payload.
//!
//! The documentation generator emits a JSON document with two top-level
//! keys:
//!
//! ```json
//! {
//!     "docsSidebars": {
//!         "docs": [{"type": "category", "label": "...", "items": [...]}]
//!     },
//!     "permalinkToSidebar": {"/docs/install": "docs"}
//! }
//! ```
//!
//! Sidebar arrays deserialize as tagged [`SidebarItem`]s so that a missing
//! `type` discriminator or a missing `label`/`href`/`items` field fails
//! parsing rather than being silently ignored.

use std::collections::HashMap;

use serde::Deserialize;
use sidenav_model::SidebarItem;

/// Deserialized payload, prior to shape validation of sidebar roots.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SidebarPayload {
    /// Sidebar name to top-level items (must all be categories).
    pub(crate) docs_sidebars: HashMap<String, Vec<SidebarItem>>,
    /// Page href to the sidebar active for that page.
    pub(crate) permalink_to_sidebar: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parses_both_tables() {
        let json = r#"{
            "docsSidebars": {
                "docs": [{"type": "category", "label": "Guide", "items": []}]
            },
            "permalinkToSidebar": {"/docs/install": "docs"}
        }"#;

        let payload: SidebarPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.docs_sidebars.len(), 1);
        assert_eq!(
            payload.permalink_to_sidebar.get("/docs/install"),
            Some(&"docs".to_owned())
        );
    }

    #[test]
    fn test_payload_missing_sidebars_key_fails() {
        let json = r#"{"permalinkToSidebar": {}}"#;

        let result: Result<SidebarPayload, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_payload_missing_permalink_key_fails() {
        let json = r#"{"docsSidebars": {}}"#;

        let result: Result<SidebarPayload, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
