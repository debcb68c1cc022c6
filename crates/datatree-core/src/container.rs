//! Generic container rendering for mappings and lists.
//!
//! Children are shown as `name: value` entries in source order. Containers
//! with more than `collapse_over` children start collapsed behind a
//! `Show {N} items` action keyed by the container's identity.

use crate::classify::Container;
use crate::disclosure::DisclosureState;
use crate::identity::child_id;
use crate::render::Renderer;
use crate::tree::{Action, Node, RenderTree};

pub(crate) fn render_container(
    renderer: &Renderer,
    container: &Container<'_>,
    identity: &str,
    disclosure: &DisclosureState,
    hide_type: Option<&str>,
    depth: usize,
    out: &mut RenderTree,
) {
    if let Some(label) = &container.type_label {
        if hide_type != Some(&**label) {
            out.push(Node::TypeLabel {
                name: label.to_string(),
            });
        }
    }

    let child_count = container.children.len();
    if child_count > renderer.options().collapse_over {
        if !disclosure.has(identity) {
            out.push(Node::Action(Action::open(
                format!("Show {} items", child_count),
                identity,
            )));
            return;
        }
        out.push(Node::Action(Action::close("Hide items", identity)));
    }

    for (name, value) in &container.children {
        let id = child_id(identity, name);
        out.push(Node::Entry {
            name: name.to_string(),
            value: renderer.render_at(value, &id, disclosure, None, depth + 1),
        });
    }
}
