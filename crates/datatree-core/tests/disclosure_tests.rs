//! Disclosure store, actions, expand-all and render options.

use datatree_core::{
    render, render_json, Action, DataTreeError, DisclosureState, RenderOptions, Renderer,
};
use serde_json::json;

// ============================================================================
// 1. DisclosureState
// ============================================================================

#[test]
fn new_state_is_empty() {
    let state = DisclosureState::new();
    assert!(state.is_empty());
    assert!(!state.has("root"));
}

#[test]
fn open_and_close_report_changes() {
    let mut state = DisclosureState::new();
    assert!(state.open("a"));
    assert!(!state.open("a"), "second open is a no-op");
    assert!(state.has("a"));
    assert_eq!(state.len(), 1);

    assert!(state.close("a"));
    assert!(!state.close("a"), "second close is a no-op");
    assert!(!state.has("a"));
}

#[test]
fn toggle_flips_and_returns_new_state() {
    let mut state = DisclosureState::new();
    assert!(state.toggle("x"));
    assert!(state.has("x"));
    assert!(!state.toggle("x"));
    assert!(!state.has("x"));
}

#[test]
fn last_write_wins_between_toggle_and_explicit_ops() {
    let mut state = DisclosureState::new();
    state.toggle("x");
    state.close("x");
    assert!(!state.has("x"));
    state.open("x");
    state.toggle("x");
    assert!(!state.has("x"));
}

#[test]
fn collect_and_extend_identities() {
    let mut state: DisclosureState = vec!["a".to_string(), "b".to_string()].into_iter().collect();
    state.extend(["c"]);
    let mut ids: Vec<&str> = state.iter().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// ============================================================================
// 2. Actions
// ============================================================================

#[test]
fn actions_target_explicit_operations() {
    let mut state = DisclosureState::new();
    let show = Action::open("Show 4 items", "root");
    let hide = Action::close("Hide items", "root");

    assert!(show.apply(&mut state));
    assert!(!show.apply(&mut state));
    assert!(state.has("root"));
    assert!(hide.apply(&mut state));
    assert!(!state.has("root"));
}

#[test]
fn actions_are_collected_in_document_order() {
    let value = json!({
        "first": {"a": 1, "b": 2, "c": 3, "d": 4},
        "second": "1\n2\n3\n4\n5\n6",
    });
    let tree = render(&value, "root", &DisclosureState::new(), None);
    let targets: Vec<&str> = tree.actions().into_iter().map(|a| a.target.as_str()).collect();
    assert_eq!(targets, vec!["root/first", "root/second"]);
}

// ============================================================================
// 3. Expand all
// ============================================================================

#[test]
fn expand_all_opens_nested_positions_until_fixpoint() {
    let value = json!({
        "a": 1, "b": 2, "c": 3,
        "d": {"w": 1, "x": 2, "y": 3, "z": "1\n2\n3\n4\n5\n6"},
    });
    let renderer = Renderer::default();
    let mut state = DisclosureState::new();

    let opened = renderer.expand_all(&value, "root", &mut state);

    assert_eq!(opened, 3);
    assert!(state.has("root"));
    assert!(state.has("root/d"));
    assert!(state.has("root/d/z"));
    let tree = renderer.render(&value, "root", &state, None);
    assert!(tree.actions().iter().all(|a| a.label.starts_with("Hide")));
}

#[test]
fn expand_all_on_flat_value_opens_nothing() {
    let mut state = DisclosureState::new();
    let opened = Renderer::default().expand_all(&json!({"a": 1}), "root", &mut state);
    assert_eq!(opened, 0);
    assert!(state.is_empty());
}

// ============================================================================
// 4. Options and JSON input
// ============================================================================

#[test]
fn default_options_match_documented_thresholds() {
    let options = RenderOptions::default();
    assert_eq!(options.inline_max_chars, 64);
    assert_eq!(options.block_max_lines, 5);
    assert_eq!(options.preview_lines, 3);
    assert_eq!(options.collapse_over, 3);
    assert_eq!(options.traceback_tail, 2);
    assert_eq!(options.max_depth, None);
    assert!(options.validate().is_ok());
}

#[test]
fn partial_options_fill_in_defaults() {
    let options: RenderOptions = serde_json::from_str(r#"{"collapse_over": 10}"#).unwrap();
    assert_eq!(options.collapse_over, 10);
    assert_eq!(options.preview_lines, 3);
}

#[test]
fn invalid_options_are_rejected() {
    let zero_preview = RenderOptions {
        preview_lines: 0,
        ..RenderOptions::default()
    };
    assert!(matches!(zero_preview.validate(), Err(DataTreeError::Config(_))));

    let preview_too_long = RenderOptions {
        preview_lines: 9,
        ..RenderOptions::default()
    };
    assert!(preview_too_long.validate().is_err());

    let zero_tail = RenderOptions {
        traceback_tail: 0,
        ..RenderOptions::default()
    };
    assert!(zero_tail.validate().is_err());
}

#[test]
fn render_json_parses_and_renders() {
    let tree = render_json(r#"{"ok": true}"#, "root", &DisclosureState::new(), None).unwrap();
    assert_eq!(tree.to_string(), "ok: true");
}

#[test]
fn render_json_rejects_invalid_input() {
    let err = render_json("{not json", "root", &DisclosureState::new(), None).unwrap_err();
    assert!(matches!(err, DataTreeError::JsonParse(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn render_tree_serializes_with_kind_tags() {
    let value = json!({"_type": "T", "a": 1, "b": 2, "c": 3, "d": 4});
    let tree = render(&value, "root", &DisclosureState::new(), None);
    let encoded = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        encoded,
        json!([
            {"kind": "type_label", "name": "T"},
            {"kind": "action", "label": "Show 4 items", "target": "root", "op": "open"},
        ])
    );
}
