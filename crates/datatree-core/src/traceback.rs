//! Traceback rendering.
//!
//! A traceback is an ordered list of frames, oldest first. Collapsed, only
//! the last `traceback_tail` frames (closest to the failure) are shown along
//! with a `Show all {N} frames` action; opened, every frame is shown with a
//! `Hide full traceback` action. Short tracebacks have no control at all.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::disclosure::DisclosureState;
use crate::options::RenderOptions;
use crate::tree::{Action, Node, RenderTree};

/// Text shown in place of a traceback that has no usable frames.
pub const INVALID_TRACEBACK: &str = "Invalid traceback";

/// One stack frame. Missing or `null` fields default to empty/zero; frames
/// without source (builtin or frozen modules) carry `null` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracebackFrame {
    #[serde(deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lineno: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub line: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TracebackFrame {
    /// `File "{filename}", line {lineno}, in {name}`
    pub fn location(&self) -> String {
        format!(
            "File \"{}\", line {}, in {}",
            self.filename, self.lineno, self.name
        )
    }
}

/// Decode the raw `frames` field, skipping entries that are not frame-shaped.
/// `None` when the field is absent, not a list, or yields no frames.
pub fn parse_frames(raw: Option<&Value>) -> Option<Vec<TracebackFrame>> {
    let frames: Vec<TracebackFrame> = raw?
        .as_array()?
        .iter()
        .enumerate()
        .filter_map(|(index, frame)| match TracebackFrame::deserialize(frame) {
            Ok(frame) => Some(frame),
            Err(err) => {
                tracing::debug!(index, %err, "skipping unreadable traceback frame");
                None
            }
        })
        .collect();
    if frames.is_empty() {
        None
    } else {
        Some(frames)
    }
}

pub(crate) fn render_traceback(
    raw_frames: Option<&Value>,
    identity: &str,
    disclosure: &DisclosureState,
    options: &RenderOptions,
    out: &mut RenderTree,
) {
    let Some(frames) = parse_frames(raw_frames) else {
        tracing::debug!(identity, "traceback without usable frames");
        out.push(Node::text(INVALID_TRACEBACK));
        return;
    };

    let total = frames.len();
    let collapsible = total > options.traceback_tail;
    let shown = if collapsible && !disclosure.has(identity) {
        out.push(Node::Action(Action::open(
            format!("Show all {} frames", total),
            identity,
        )));
        &frames[total - options.traceback_tail..]
    } else {
        if collapsible {
            out.push(Node::Action(Action::close("Hide full traceback", identity)));
        }
        &frames[..]
    };

    for frame in shown {
        out.push(Node::Frame {
            location: frame.location(),
            source: frame.line.trim().to_string(),
        });
    }
}
