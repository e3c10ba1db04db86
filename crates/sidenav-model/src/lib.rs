//! Sidebar navigation tree types for Sidenav.
//!
//! This crate provides:
//! - [`SidebarTree`]: An ordered, immutable tree of navigation categories
//! - [`FlatEntry`]: Flattened presentation rows produced by pre-order traversal
//!
//! The types are pure data with no I/O. Loading and validation live in
//! `sidenav-registry`.
//!
//! # Features
//!
//! - `serde`: Derives `Serialize`/`Deserialize` for the wire-tagged item
//!   types (`type` discriminator, as emitted by the documentation generator).

pub(crate) mod flatten;
pub(crate) mod tree;

pub use flatten::FlatEntry;
pub use tree::{Category, Link, SidebarItem, SidebarTree};
