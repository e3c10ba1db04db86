//! Sidebar payload loading and permalink lookup for Sidenav.
//!
//! This crate provides:
//! - [`SidebarRegistry`]: Named sidebar trees plus the permalink index,
//!   loaded once from a generated payload and shared read-only
//! - Payload extraction from the generator's module-chunk wrapper
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sidenav_registry::SidebarRegistry;
//!
//! let payload = br#"{
//!     "docsSidebars": {
//!         "docs": [{
//!             "type": "category",
//!             "label": "Guide",
//!             "items": [{"type": "link", "label": "Install", "href": "/docs/install"}]
//!         }]
//!     },
//!     "permalinkToSidebar": {"/docs/install": "docs"}
//! }"#;
//!
//! let registry = SidebarRegistry::load(payload)?;
//!
//! // Which sidebar should be highlighted for a page?
//! assert_eq!(registry.lookup_sidebar("/docs/install"), Some("docs"));
//!
//! // Flatten a tree for presentation
//! let rows = registry.sidebar("docs").unwrap().flatten();
//! assert_eq!(rows.len(), 2);
//! # Ok(())
//! # }
//! ```

pub(crate) mod bundle;
mod error;
pub(crate) mod payload;
pub(crate) mod registry;

pub use error::LoadError;
pub use registry::{ConsistencyGap, SidebarRegistry};

// Re-export tree types from sidenav-model for convenience
pub use sidenav_model::{Category, FlatEntry, Link, SidebarItem, SidebarTree};
