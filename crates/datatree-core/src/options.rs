//! Render options -- the thresholds that decide when content is collapsed.
//!
//! Every field has a default, so a partial TOML or JSON document deserializes
//! into a complete set of options.

use crate::error::{DataTreeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Strings shorter than this (in characters) without line breaks render inline.
    pub inline_max_chars: usize,

    /// Multi-line strings with at most this many lines render in full.
    pub block_max_lines: usize,

    /// Lines shown from a collapsed long string.
    pub preview_lines: usize,

    /// Containers with more children than this are collapsible.
    pub collapse_over: usize,

    /// Frames shown from a collapsed traceback (taken from the end).
    pub traceback_tail: usize,

    /// Nesting depth past which values render as `...`. `None` disables the guard.
    pub max_depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            inline_max_chars: 64,
            block_max_lines: 5,
            preview_lines: 3,
            collapse_over: 3,
            traceback_tail: 2,
            max_depth: None,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.preview_lines == 0 {
            return Err(DataTreeError::Config(
                "preview_lines must be at least 1".to_string(),
            ));
        }
        if self.preview_lines > self.block_max_lines {
            return Err(DataTreeError::Config(format!(
                "preview_lines ({}) must not exceed block_max_lines ({})",
                self.preview_lines, self.block_max_lines
            )));
        }
        if self.traceback_tail == 0 {
            return Err(DataTreeError::Config(
                "traceback_tail must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
