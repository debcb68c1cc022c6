//! # datatree-core
//!
//! Render an arbitrary JSON-like value into a collapsible tree for inspection.
//!
//! Each value is classified into one strategy (primitive text, tiered string,
//! image blob, rich HTML, traceback, or generic container). Every tree
//! position gets a path-derived identity (`root/a/b`), and a shared
//! [`DisclosureState`] records which identities the user has expanded, so
//! expand/collapse state survives re-renders.
//!
//! ## Quick start
//!
//! ```rust
//! use datatree_core::{render, DisclosureState};
//! use serde_json::json;
//!
//! let value = json!({"a": 1, "b": 2, "c": 3, "d": 4});
//! let mut opened = DisclosureState::new();
//!
//! let tree = render(&value, "root", &opened, None);
//! assert_eq!(tree.to_string(), "[Show 4 items]");
//!
//! // The user clicks the action; render again.
//! tree.actions()[0].apply(&mut opened);
//! let tree = render(&value, "root", &opened, None);
//! assert_eq!(tree.to_string(), "[Hide items]\na: 1\nb: 2\nc: 3\nd: 4");
//! ```
//!
//! ## Modules
//!
//! - [`classify`] — value → rendering strategy, discriminator alias table
//! - [`render`] — recursive entry point, [`Renderer`], `expand_all`
//! - [`tree`] — render-tree output model and plain-text form
//! - [`disclosure`] — the opened-identity set
//! - [`identity`] — `parent/name` identities
//! - [`traceback`] — traceback frames and their rendering
//! - [`leaf`] — string tiers, images, rich HTML
//! - [`sanitize`] — HTML sanitizer seam
//! - [`options`] — collapse thresholds
//! - [`error`] — error types

pub mod classify;
mod container;
pub mod disclosure;
pub mod error;
pub mod identity;
pub mod leaf;
pub mod options;
pub mod render;
pub mod sanitize;
pub mod traceback;
pub mod tree;

pub use classify::{classify, Strategy, Tag, DISCRIMINATOR};
pub use disclosure::DisclosureState;
pub use error::DataTreeError;
pub use identity::child_id;
pub use options::RenderOptions;
pub use render::{render, render_json, Renderer};
pub use sanitize::{EscapeHtml, HtmlSanitizer};
pub use traceback::TracebackFrame;
pub use tree::{Action, DisclosureOp, Node, RenderTree};
