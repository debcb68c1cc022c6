//! The recursive render entry point.
//!
//! [`Renderer::render`] classifies a value and dispatches to one strategy.
//! Only the container strategy recurses; each child gets the identity
//! `parent/name` and the same [`DisclosureState`]. A render is a pure function
//! of `(value, identity, disclosure)`: rendering twice with the same inputs
//! yields identical trees.

use std::fmt;

use serde_json::Value;

use crate::classify::{classify, Strategy};
use crate::container::render_container;
use crate::disclosure::DisclosureState;
use crate::error::Result;
use crate::leaf::{render_html, render_image, render_string, ELLIPSIS};
use crate::options::RenderOptions;
use crate::sanitize::{EscapeHtml, HtmlSanitizer};
use crate::traceback::render_traceback;
use crate::tree::{DisclosureOp, Node, RenderTree};

/// Text rendered for `null`.
pub const NULL_TEXT: &str = "None";

/// Renders values with a fixed set of options and an HTML sanitizer.
pub struct Renderer {
    options: RenderOptions,
    sanitizer: Box<dyn HtmlSanitizer>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            sanitizer: Box::new(EscapeHtml),
        }
    }

    /// Replace the sanitizer applied to rich HTML payloads.
    pub fn with_sanitizer(mut self, sanitizer: impl HtmlSanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `value` rooted at `identity`.
    ///
    /// `hide_type` suppresses the top-level type label when it equals the
    /// value's discriminator, for hosts that already display it.
    pub fn render(
        &self,
        value: &Value,
        identity: &str,
        disclosure: &DisclosureState,
        hide_type: Option<&str>,
    ) -> RenderTree {
        self.render_at(value, identity, disclosure, hide_type, 0)
    }

    /// Parse `json` and render it.
    pub fn render_json(
        &self,
        json: &str,
        identity: &str,
        disclosure: &DisclosureState,
        hide_type: Option<&str>,
    ) -> Result<RenderTree> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.render(&value, identity, disclosure, hide_type))
    }

    /// Open every collapsible position reachable from `identity`.
    ///
    /// Renders, applies every `Open` action, and repeats until a pass opens
    /// nothing new. Returns the number of identities opened.
    pub fn expand_all(
        &self,
        value: &Value,
        identity: &str,
        disclosure: &mut DisclosureState,
    ) -> usize {
        let mut opened = 0;
        loop {
            let tree = self.render(value, identity, disclosure, None);
            let targets: Vec<String> = tree
                .actions()
                .into_iter()
                .filter(|action| action.op == DisclosureOp::Open)
                .map(|action| action.target.clone())
                .collect();
            let before = opened;
            for target in &targets {
                if disclosure.open(target) {
                    opened += 1;
                }
            }
            if opened == before {
                return opened;
            }
        }
    }

    pub(crate) fn render_at(
        &self,
        value: &Value,
        identity: &str,
        disclosure: &DisclosureState,
        hide_type: Option<&str>,
        depth: usize,
    ) -> RenderTree {
        let mut out = RenderTree::new();

        if self.options.max_depth.is_some_and(|max| depth > max) {
            tracing::debug!(identity, depth, "depth limit reached");
            out.push(Node::text(ELLIPSIS));
            return out;
        }

        let strategy = classify(value);
        tracing::trace!(identity, strategy = strategy.name(), "classified value");

        match strategy {
            Strategy::Null => out.push(Node::text(NULL_TEXT)),
            Strategy::Bool(b) => out.push(Node::text(b.to_string())),
            Strategy::Number(n) => out.push(Node::text(n.to_string())),
            Strategy::Text(text) => {
                render_string(text, identity, disclosure, &self.options, &mut out);
            }
            Strategy::Html(html) => render_html(html, self.sanitizer.as_ref(), &mut out),
            Strategy::Image { mime_type, data } => render_image(mime_type, data, &mut out),
            Strategy::Traceback(frames) => {
                render_traceback(frames, identity, disclosure, &self.options, &mut out);
            }
            Strategy::Container(container) => render_container(
                self,
                &container,
                identity,
                disclosure,
                hide_type,
                depth,
                &mut out,
            ),
        }

        out
    }
}

/// Render `value` with default options.
///
/// # Examples
///
/// ```
/// use datatree_core::{render, DisclosureState};
/// use serde_json::json;
///
/// let opened = DisclosureState::new();
/// let tree = render(&json!({"name": "Alice", "age": 30}), "root", &opened, None);
/// assert_eq!(tree.to_string(), "name: Alice\nage: 30");
/// ```
pub fn render(
    value: &Value,
    identity: &str,
    disclosure: &DisclosureState,
    hide_type: Option<&str>,
) -> RenderTree {
    Renderer::default().render(value, identity, disclosure, hide_type)
}

/// Parse `json` and render it with default options.
pub fn render_json(
    json: &str,
    identity: &str,
    disclosure: &DisclosureState,
    hide_type: Option<&str>,
) -> Result<RenderTree> {
    Renderer::default().render_json(json, identity, disclosure, hide_type)
}
