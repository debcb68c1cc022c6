//! Error types for datatree operations.
//!
//! Rendering itself never fails; these errors only arise at the edges, when
//! raw JSON text is parsed or when render options are rejected.

use thiserror::Error;

/// Errors that can occur before a value reaches the renderer.
#[derive(Error, Debug)]
pub enum DataTreeError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Render options failed validation.
    #[error("Invalid render options: {0}")]
    Config(String),
}

/// Convenience alias used throughout datatree-core.
pub type Result<T> = std::result::Result<T, DataTreeError>;
