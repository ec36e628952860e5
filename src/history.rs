//! Bounded, linear undo log of whole-document snapshots.
//!
//! Every entry is a deep copy of the document taken at an action boundary
//! (end of a gesture, a delete, an explicit save). The cursor marks the entry
//! the live document was last synchronised with. Restoring moves the cursor
//! without discarding anything; the next checkpoint drops every entry after
//! the cursor before appending, so there is never more than one "future".

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{EngineError, EngineResult};
use crate::scene::Scene;
use crate::util::time;

/// Default number of snapshots kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Why a checkpoint was taken. Shown next to each entry in the history browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckpointReason {
    Initial,
    DrawAction,
    Delete,
    Manual,
    /// Host-defined label, e.g. "AI Gen".
    Other(String),
}

impl CheckpointReason {
    pub fn label(&self) -> &str {
        match self {
            Self::Initial => "Initial",
            Self::DrawAction => "Draw Action",
            Self::Delete => "Delete",
            Self::Manual => "Manual",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for CheckpointReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    text: String,
    scene: Scene,
    timestamp_ms: u64,
    reason: CheckpointReason,
}

impl HistoryEntry {
    fn capture(document: &Document, reason: CheckpointReason) -> Self {
        Self {
            text: document.text.clone(),
            scene: document.scene.clone(),
            timestamp_ms: time::timestamp_millis(),
            reason,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn reason(&self) -> &CheckpointReason {
        &self.reason
    }

    /// A fresh, independent copy of the stored document.
    pub fn to_document(&self) -> Document {
        Document::with_scene(self.text.clone(), self.scene.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory")]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

/// Unchecked wire form of `History`.
#[derive(Deserialize)]
struct StoredHistory {
    entries: VecDeque<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

impl TryFrom<StoredHistory> for History {
    type Error = EngineError;

    fn try_from(stored: StoredHistory) -> EngineResult<Self> {
        let history = Self {
            entries: stored.entries,
            cursor: stored.cursor,
            capacity: stored.capacity,
        };
        if !history.is_consistent() {
            return Err(EngineError::InconsistentHistory {
                cursor: history.cursor,
                len: history.entries.len(),
                capacity: history.capacity,
            });
        }
        Ok(history)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(&Document::default(), DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Start a history whose first entry is an "Initial" snapshot of `document`.
    pub fn new(document: &Document, capacity: usize) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(HistoryEntry::capture(document, CheckpointReason::Initial));
        Self {
            entries,
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append a snapshot of `document` after the cursor and return the new cursor.
    pub fn checkpoint(&mut self, document: &Document, reason: CheckpointReason) -> usize {
        let dropped = self.entries.len() - (self.cursor + 1);
        if dropped > 0 {
            log::debug!("Checkpoint discards {} redo entries", dropped);
            self.entries.truncate(self.cursor + 1);
        }

        log::info!("Checkpoint: {}", reason);
        self.entries.push_back(HistoryEntry::capture(document, reason));
        self.evict_overflow();
        self.cursor = self.entries.len() - 1;
        self.cursor
    }

    /// Move the cursor to `index` and hand back a copy of that snapshot.
    ///
    /// Entries after `index` stay navigable until the next checkpoint.
    pub fn restore(&mut self, index: usize) -> EngineResult<Document> {
        let entry = self.entries.get(index).ok_or(EngineError::InvalidIndex {
            index,
            len: self.entries.len(),
        })?;
        let document = entry.to_document();
        self.cursor = index;
        Ok(document)
    }

    pub fn undo(&mut self) -> Option<Document> {
        if !self.can_undo() {
            return None;
        }
        self.restore(self.cursor - 1).ok()
    }

    pub fn redo(&mut self) -> Option<Document> {
        if !self.can_redo() {
            return None;
        }
        self.restore(self.cursor + 1).ok()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; a history always holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Change the capacity, evicting the oldest entries if needed.
    ///
    /// The cursor follows its entry; if that entry is evicted it lands on the
    /// oldest one kept.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        let evicted = self.evict_overflow();
        self.cursor = self.cursor.saturating_sub(evicted);
    }

    /// Whether the invariants hold. Deserialization rejects histories where they don't.
    pub fn is_consistent(&self) -> bool {
        !self.entries.is_empty()
            && self.cursor < self.entries.len()
            && self.capacity >= 1
            && self.entries.len() <= self.capacity
    }

    fn evict_overflow(&mut self) -> usize {
        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            log::debug!("Evicted {} oldest history entries", evicted);
        }
        evicted
    }
}
