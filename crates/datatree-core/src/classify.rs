//! Value classification -- pick exactly one rendering strategy per value.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. null
//! 2. boolean
//! 3. number
//! 4. string
//! 5. mapping tagged as rich HTML with a string `html` field
//! 6. mapping tagged as a blob whose `mime_type` is a supported image type
//!    and whose `data` field is a string
//! 7. mapping tagged as a traceback
//! 8. anything else: generic container
//!
//! Tag spellings are normalized through [`Tag::from_discriminator`], so
//! legacy aliases are recognized here and nowhere else. Classification never
//! fails: unrecognized tags and unsupported blobs fall through to the
//! container strategy, which shows their fields as ordinary children.

use std::borrow::Cow;

use serde_json::{Map, Number, Value};

/// Reserved mapping key holding the type discriminator.
pub const DISCRIMINATOR: &str = "_type";

/// Media types that blob values may carry to render as images.
pub const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Specialized interpretations selected by the discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Blob,
    Html,
    Traceback,
}

/// Canonical spelling first, legacy alias second.
const TAG_ALIASES: &[(&str, Tag)] = &[
    ("$blob", Tag::Blob),
    ("Blob", Tag::Blob),
    ("$html", Tag::Html),
    ("Html", Tag::Html),
    ("$traceback", Tag::Traceback),
    ("Traceback", Tag::Traceback),
];

impl Tag {
    /// Resolve a discriminator value, accepting canonical and legacy spellings.
    pub fn from_discriminator(raw: &str) -> Option<Tag> {
        TAG_ALIASES
            .iter()
            .find(|(spelling, _)| *spelling == raw)
            .map(|(_, tag)| *tag)
    }

    pub fn canonical(self) -> &'static str {
        match self {
            Tag::Blob => "$blob",
            Tag::Html => "$html",
            Tag::Traceback => "$traceback",
        }
    }
}

/// The strategy chosen for one value, carrying the pieces it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy<'a> {
    Null,
    Bool(bool),
    Number(&'a Number),
    Text(&'a str),
    Html(&'a str),
    Image { mime_type: &'a str, data: &'a str },
    /// The raw `frames` field, if present. Validated by the traceback renderer.
    Traceback(Option<&'a Value>),
    Container(Container<'a>),
}

impl Strategy<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Null => "null",
            Strategy::Bool(_) => "bool",
            Strategy::Number(_) => "number",
            Strategy::Text(_) => "text",
            Strategy::Html(_) => "html",
            Strategy::Image { .. } => "image",
            Strategy::Traceback(_) => "traceback",
            Strategy::Container(_) => "container",
        }
    }
}

/// A mapping prepared for generic rendering: the discriminator has been
/// extracted and the remaining properties listed in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<'a> {
    pub type_label: Option<Cow<'a, str>>,
    pub children: Vec<(Cow<'a, str>, &'a Value)>,
}

/// Select the rendering strategy for `value`.
pub fn classify(value: &Value) -> Strategy<'_> {
    match value {
        Value::Null => Strategy::Null,
        Value::Bool(b) => Strategy::Bool(*b),
        Value::Number(n) => Strategy::Number(n),
        Value::String(s) => Strategy::Text(s),
        Value::Array(items) => Strategy::Container(Container {
            type_label: None,
            children: items
                .iter()
                .enumerate()
                .map(|(i, item)| (Cow::Owned(i.to_string()), item))
                .collect(),
        }),
        Value::Object(map) => classify_mapping(map),
    }
}

fn classify_mapping(map: &Map<String, Value>) -> Strategy<'_> {
    let tag = map
        .get(DISCRIMINATOR)
        .and_then(Value::as_str)
        .and_then(Tag::from_discriminator);

    match tag {
        Some(Tag::Html) => {
            if let Some(html) = map.get("html").and_then(Value::as_str) {
                return Strategy::Html(html);
            }
        }
        Some(Tag::Blob) => {
            let mime_type = map
                .get("mime_type")
                .and_then(Value::as_str)
                .filter(|mime| IMAGE_MIME_TYPES.contains(mime));
            let data = map.get("data").and_then(Value::as_str);
            if let (Some(mime_type), Some(data)) = (mime_type, data) {
                return Strategy::Image { mime_type, data };
            }
        }
        Some(Tag::Traceback) => return Strategy::Traceback(map.get("frames")),
        None => {}
    }

    Strategy::Container(container_of(map))
}

fn container_of(map: &Map<String, Value>) -> Container<'_> {
    let type_label = map.get(DISCRIMINATOR).filter(|raw| !raw.is_null()).map(|raw| match raw {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    });
    let children = map
        .iter()
        .filter(|(key, _)| key.as_str() != DISCRIMINATOR)
        .map(|(key, value)| (Cow::Borrowed(key.as_str()), value))
        .collect();
    Container {
        type_label,
        children,
    }
}
