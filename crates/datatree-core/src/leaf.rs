//! Leaf renderers: strings, image blobs and rich HTML.
//!
//! Strings are rendered in three tiers:
//!
//! - short and single-line: inline text
//! - at most `block_max_lines` lines: a pre-formatted block
//! - longer: disclosure-gated. Closed shows the first `preview_lines` lines,
//!   an ellipsis and a `Show {N} lines` action; open shows everything plus a
//!   `Hide lines` action. Both actions target the string's own identity.

use crate::disclosure::DisclosureState;
use crate::options::RenderOptions;
use crate::sanitize::HtmlSanitizer;
use crate::tree::{Action, Node, RenderTree};

/// Marker appended to a collapsed preview.
pub const ELLIPSIS: &str = "...";

/// Split on `\r\n`, `\r` or `\n`. A trailing break yields a trailing empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

fn has_line_break(text: &str) -> bool {
    text.contains(|c| c == '\n' || c == '\r')
}

pub(crate) fn render_string(
    text: &str,
    identity: &str,
    disclosure: &DisclosureState,
    options: &RenderOptions,
    out: &mut RenderTree,
) {
    if text.chars().count() < options.inline_max_chars && !has_line_break(text) {
        out.push(Node::text(text));
        return;
    }

    let lines = split_lines(text);
    if lines.len() <= options.block_max_lines {
        out.push(Node::block(text));
        return;
    }

    if disclosure.has(identity) {
        out.push(Node::block(text));
        out.push(Node::Action(Action::close("Hide lines", identity)));
    } else {
        let preview: Vec<&str> = lines.iter().take(options.preview_lines).copied().collect();
        out.push(Node::block(preview.join("\n")));
        out.push(Node::text(ELLIPSIS));
        out.push(Node::Action(Action::open(
            format!("Show {} lines", lines.len()),
            identity,
        )));
    }
}

pub(crate) fn render_image(mime_type: &str, data: &str, out: &mut RenderTree) {
    out.push(Node::Image {
        mime_type: mime_type.to_string(),
        src: format!("data:{};base64,{}", mime_type, data),
    });
}

pub(crate) fn render_html(html: &str, sanitizer: &dyn HtmlSanitizer, out: &mut RenderTree) {
    out.push(Node::Html {
        content: sanitizer.sanitize(html),
    });
}
