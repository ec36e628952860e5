use thiserror::Error;

use crate::id_generator::ElementId;

/// Errors surfaced by the annotation engine.
///
/// None of these are fatal. The worst outcome of any of them is a dropped
/// gesture or an ignored request.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `restore` was asked for an entry that does not exist. The cursor is left alone.
    #[error("history index {index} out of range (history has {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    /// A stored history whose cursor or capacity does not fit its entries.
    #[error("inconsistent history: cursor {cursor}, {len} entries, capacity {capacity}")]
    InconsistentHistory { cursor: usize, len: usize, capacity: usize },

    /// A gesture ended with a single-point stroke or a zero-area shape.
    #[error("element {0} is degenerate and was discarded")]
    DegenerateElement(ElementId),

    /// The referenced element is not (or no longer) in the scene.
    #[error("no element with id {0}")]
    UnknownElementId(ElementId),

    #[error("failed to (de)serialize document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
