//! The gesture state machine of the annotation layer.
//!
//! ```text
//!            PointerDown (Pen/Rect/Ellipse)
//!        ┌──────────────────────────────────► Drawing ──┐
//!        │   PointerDown on selected handle             │
//!  Idle ─┼──────────────────────────────────► Resizing ─┼─ PointerUp ─► Idle
//!        │   PointerDown on an element                  │
//!        └──────────────────────────────────► Moving ───┘
//! ```
//!
//! A pointer-down that hits nothing with the Select tool stays in `Idle`.

use egui::Pos2;

use crate::id_generator::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A freshly created element is being shaped by the drag
    Drawing { id: ElementId },
    /// An existing element follows the pointer
    Moving {
        id: ElementId,
        /// Document position of the previous pointer event. Deltas are taken
        /// against this, not the gesture start.
        last: Pos2,
    },
    /// The selected box's far corner follows the pointer; the anchor stays put
    Resizing { id: ElementId },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// The element the current gesture operates on
    pub fn active_element(&self) -> Option<ElementId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Drawing { id }
            | InteractionState::Moving { id, .. }
            | InteractionState::Resizing { id } => Some(*id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::Drawing { .. } => "Drawing",
            InteractionState::Moving { .. } => "Moving",
            InteractionState::Resizing { .. } => "Resizing",
        }
    }
}
