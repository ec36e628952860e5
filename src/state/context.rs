//! The main context of the annotation layer, coordinating the document, the
//! interaction controller and the history.
//!
//! The host feeds pointer events in device pixels through
//! `handle_pointer_down/move/up`, flips drawing mode and tools, and reads back
//! the display list and history metadata. Every committed gesture, every
//! delete and every explicit save produces exactly one checkpoint; pointer
//! moves never do.
//!
//! ```rust
//! use ink_notes::state::EditorContext;
//! use ink_notes::tools::Tool;
//!
//! let mut context = EditorContext::default();
//! context.set_drawing_mode(true);
//! context.set_tool(Tool::Rectangle);
//! context.handle_pointer_down(10.0, 10.0);
//! context.handle_pointer_move(60.0, 40.0);
//! context.handle_pointer_up();
//! assert_eq!(context.scene().len(), 1);
//! assert_eq!(context.history().len(), 2);
//! ```

use egui::{Pos2, Shape};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{EditorConfig, GestureOutcome, InteractionController, InteractionState};
use crate::document::Document;
use crate::element::ElementType;
use crate::error::{EngineError, EngineResult};
use crate::history::{CheckpointReason, History};
use crate::id_generator::ElementId;
use crate::input::Viewport;
use crate::renderer::{RenderStyle, Renderer};
use crate::scene::Scene;
use crate::tools::Tool;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorContext {
    document: Document,
    history: History,
    config: EditorConfig,
    #[serde(skip)]
    controller: InteractionController,
    #[serde(skip)]
    drawing_mode: bool,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(Document::default(), EditorConfig::default())
    }
}

impl EditorContext {
    /// Start a session on `document`. Its current state becomes the "Initial" entry.
    pub fn new(document: Document, mut config: EditorConfig) -> Self {
        config.history_capacity = config.history_capacity.max(1);
        let history = History::new(&document, config.history_capacity);
        Self {
            document,
            history,
            config,
            controller: InteractionController::default(),
            drawing_mode: false,
        }
    }

    // --- Mode / tool / viewport ---

    pub fn drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    /// Leaving drawing mode mid-gesture finishes the gesture as a pointer-up would.
    pub fn set_drawing_mode(&mut self, enabled: bool) {
        if self.drawing_mode == enabled {
            return;
        }
        if !enabled && !self.controller.state().is_idle() {
            self.finish_gesture();
        }
        info!("Drawing mode {}", if enabled { "on" } else { "off" });
        self.drawing_mode = enabled;
    }

    pub fn tool(&self) -> Tool {
        self.controller.tool()
    }

    pub fn set_tool(&mut self, tool: Tool) -> bool {
        self.controller.set_tool(tool)
    }

    pub fn viewport(&self) -> &Viewport {
        self.controller.viewport()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.controller.set_viewport(viewport);
    }

    // --- Text ---

    pub fn text(&self) -> &str {
        &self.document.text
    }

    /// Mutable access for the host's text editor. Text edits are not checkpointed.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.document.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.document.text = text.into();
    }

    // --- Pointer input ---

    pub fn handle_pointer_down(&mut self, x: f32, y: f32) {
        if !self.drawing_mode {
            return;
        }
        self.controller
            .pointer_down(&mut self.document.scene, Pos2::new(x, y), &self.config);
    }

    /// Returns whether the scene changed.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.drawing_mode {
            return false;
        }
        self.controller
            .pointer_move(&mut self.document.scene, Pos2::new(x, y))
    }

    pub fn handle_pointer_up(&mut self) -> GestureOutcome {
        if !self.drawing_mode {
            return GestureOutcome::Ignored;
        }
        self.finish_gesture()
    }

    fn finish_gesture(&mut self) -> GestureOutcome {
        let outcome = self.controller.pointer_up(&mut self.document.scene);
        if let GestureOutcome::Committed(_) = outcome {
            self.history
                .checkpoint(&self.document, CheckpointReason::DrawAction);
        }
        outcome
    }

    // --- Mutations outside gestures ---

    /// Remove the selected element and checkpoint the deletion.
    pub fn delete_selected(&mut self) -> Option<ElementId> {
        let id = self.controller.selection()?;
        match self.delete_element(id) {
            Ok(_) => Some(id),
            Err(err) => {
                warn!("{}", err);
                self.controller.clear_selection();
                None
            }
        }
    }

    /// Remove an element by id and checkpoint the deletion.
    pub fn delete_element(&mut self, id: ElementId) -> EngineResult<ElementType> {
        if self.controller.state().active_element() == Some(id) {
            self.controller.reset();
        }
        let removed = self
            .document
            .scene
            .remove_element(id)
            .ok_or(EngineError::UnknownElementId(id))?;
        self.controller.retain_selection(&self.document.scene);
        self.history.checkpoint(&self.document, CheckpointReason::Delete);
        Ok(removed)
    }

    /// Snapshot the current document. Returns the new history cursor.
    pub fn checkpoint(&mut self, reason: CheckpointReason) -> usize {
        self.history.checkpoint(&self.document, reason)
    }

    /// Jump to history entry `index`. The live document is replaced with a copy of it.
    pub fn restore(&mut self, index: usize) -> EngineResult<()> {
        let document = self.history.restore(index)?;
        debug!("Restored history entry {}", index);
        self.replace_document(document);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(document) => {
                self.replace_document(document);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(document) => {
                self.replace_document(document);
                true
            }
            None => false,
        }
    }

    fn replace_document(&mut self, document: Document) {
        self.controller.reset();
        self.document = document;
        self.controller.retain_selection(&self.document.scene);
    }

    // --- Configuration ---

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, mut config: EditorConfig) {
        config.history_capacity = config.history_capacity.max(1);
        if config.history_capacity != self.history.capacity() {
            self.history.set_capacity(config.history_capacity);
        }
        self.config = config;
    }

    // --- Queries ---

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn scene(&self) -> &Scene {
        &self.document.scene
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.controller.selection()
    }

    pub fn state(&self) -> InteractionState {
        self.controller.state()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Shapes for the current scene and selection, in document coordinates.
    pub fn display_list(&self) -> Vec<Shape> {
        Renderer::new(RenderStyle::from(&self.config))
            .display_list(&self.document.scene, self.controller.selection())
    }

    /// Repair a session loaded from storage. Returns whether anything changed.
    ///
    /// The stored history wins over a disagreeing capacity setting, so no
    /// snapshot is lost on load.
    pub(crate) fn sanitize(&mut self) -> bool {
        let capacity = self.history.capacity();
        if self.config.history_capacity == capacity {
            return false;
        }
        warn!(
            "Stored history capacity {} disagrees with settings ({}); keeping {}",
            capacity, self.config.history_capacity, capacity
        );
        self.config.history_capacity = capacity;
        true
    }
}
