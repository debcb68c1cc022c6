//! Render tree -- the output of a render pass.
//!
//! A [`RenderTree`] is an ordered list of [`Node`]s that a display layer turns
//! into widgets. Disclosure controls are plain data ([`Action`]): the host
//! applies one to its [`DisclosureState`] when the user activates it and then
//! renders again.
//!
//! The `Display` impl prints the tree as indented plain text, two spaces per
//! nesting level. An entry whose value is a single line of text prints as
//! `name: value`.

use std::fmt;

use serde::Serialize;

use crate::disclosure::DisclosureState;
use crate::leaf::split_lines;

/// Indentation added per nesting level in the plain-text form.
const INDENT: &str = "  ";

/// Indentation of a traceback frame's source line under its location.
const SOURCE_INDENT: &str = "    ";

/// One display element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Inline text run.
    Text { text: String },
    /// Pre-formatted text with line breaks preserved.
    Block { text: String },
    /// A container's discriminator value.
    TypeLabel { name: String },
    /// Disclosure control.
    Action(Action),
    /// Inline image; `src` is a base64 data URI.
    Image { mime_type: String, src: String },
    /// Sanitized rich content.
    Html { content: String },
    /// One traceback frame.
    Frame { location: String, source: String },
    /// Labeled child of a container.
    Entry { name: String, value: RenderTree },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn block(text: impl Into<String>) -> Self {
        Node::Block { text: text.into() }
    }
}

/// Whether an action opens or closes its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclosureOp {
    Open,
    Close,
}

impl fmt::Display for DisclosureOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisclosureOp::Open => f.write_str("open"),
            DisclosureOp::Close => f.write_str("close"),
        }
    }
}

/// A labeled control bound to one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: String,
    pub target: String,
    pub op: DisclosureOp,
}

impl Action {
    pub fn open(label: impl Into<String>, target: &str) -> Self {
        Self {
            label: label.into(),
            target: target.to_string(),
            op: DisclosureOp::Open,
        }
    }

    pub fn close(label: impl Into<String>, target: &str) -> Self {
        Self {
            label: label.into(),
            target: target.to_string(),
            op: DisclosureOp::Close,
        }
    }

    /// Trigger the action once. Returns `true` if the state changed.
    pub fn apply(&self, state: &mut DisclosureState) -> bool {
        match self.op {
            DisclosureOp::Open => state.open(&self.target),
            DisclosureOp::Close => state.close(&self.target),
        }
    }
}

/// Ordered sequence of nodes produced for one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderTree {
    nodes: Vec<Node>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every action in the tree, in document order.
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        collect_actions(self, &mut out);
        out
    }

    /// A single text-like node with no structure of its own.
    fn is_leaf(&self) -> bool {
        matches!(
            self.nodes.as_slice(),
            [Node::Text { .. } | Node::Block { .. } | Node::Image { .. } | Node::Html { .. }]
        )
    }

    /// The plain-text form, one string per output line.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node_lines(node, &mut out);
        }
        out
    }
}

impl From<Vec<Node>> for RenderTree {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl fmt::Display for RenderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

fn collect_actions<'a>(tree: &'a RenderTree, out: &mut Vec<&'a Action>) {
    for node in &tree.nodes {
        match node {
            Node::Action(action) => out.push(action),
            Node::Entry { value, .. } => collect_actions(value, out),
            _ => {}
        }
    }
}

fn node_lines(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Text { text } => out.push(text.clone()),
        Node::Block { text } => out.extend(split_lines(text).into_iter().map(str::to_string)),
        Node::TypeLabel { name } => out.push(format!("<{}>", name)),
        Node::Action(action) => out.push(format!("[{}]", action.label)),
        Node::Image { mime_type, .. } => out.push(format!("[image {}]", mime_type)),
        Node::Html { content } => out.extend(split_lines(content).into_iter().map(str::to_string)),
        Node::Frame { location, source } => {
            out.push(location.clone());
            if !source.is_empty() {
                out.push(format!("{}{}", SOURCE_INDENT, source));
            }
        }
        Node::Entry { name, value } => {
            let child = value.lines();
            if child.len() == 1 && value.is_leaf() {
                out.push(format!("{}: {}", name, child[0]));
            } else {
                out.push(format!("{}:", name));
                out.extend(child.into_iter().map(|line| format!("{}{}", INDENT, line)));
            }
        }
    }
}
