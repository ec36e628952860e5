use egui::Pos2;
use log::{debug, info};

use super::{EditorConfig, InteractionState};
use crate::element::{BoxShape, Element, ElementPatch, ElementType, Stroke};
use crate::geometry;
use crate::id_generator::{ElementId, generate_id};
use crate::input::Viewport;
use crate::scene::Scene;
use crate::tools::Tool;

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture was in progress.
    Ignored,
    /// The element survived the gesture and should be checkpointed.
    Committed(ElementId),
    /// The element was degenerate and has been removed from the scene.
    Discarded(ElementId),
    /// The element disappeared from the scene while the gesture was running.
    Vanished(ElementId),
}

/// Pointer-driven editing of a `Scene`.
///
/// Converts device coordinates to document space, hit-tests, and mutates the
/// scene directly on every move. It never touches history; the caller
/// checkpoints when `pointer_up` reports a commit.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
    tool: Tool,
    selection: Option<ElementId>,
    viewport: Viewport,
}

impl InteractionController {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            ..Default::default()
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Switch tools. Refused mid-gesture; otherwise drops the selection.
    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if !self.state.is_idle() {
            debug!("Not switching to {} during {}", tool.name(), self.state.name());
            return false;
        }
        info!("Tool selected: {}", tool.name());
        self.tool = tool;
        self.selection = None;
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Drop the selection if its element is gone from `scene`.
    pub fn retain_selection(&mut self, scene: &Scene) {
        if let Some(id) = self.selection {
            if !scene.contains(id) {
                self.selection = None;
            }
        }
    }

    /// Abandon any gesture without committing it.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
    }

    pub fn pointer_down(&mut self, scene: &mut Scene, device: Pos2, config: &EditorConfig) {
        if !self.state.is_idle() {
            debug!("Ignoring pointer down during {}", self.state.name());
            return;
        }

        let pos = self.viewport.device_to_document(device);
        let id = generate_id();
        let color = config.stroke_color;
        let element = match self.tool {
            Tool::Select => return self.begin_select(scene, pos, config),
            Tool::Pen => ElementType::Stroke(Stroke::starting_at(id, pos, color)),
            Tool::Rectangle => ElementType::Rectangle(BoxShape::anchored_at(id, pos, color)),
            Tool::Ellipse => ElementType::Ellipse(BoxShape::anchored_at(id, pos, color)),
        };

        debug!("Drawing new {} {} at {:?}", element.element_type(), id, pos);
        scene.add_element(element);
        self.selection = Some(id);
        self.state = InteractionState::Drawing { id };
    }

    /// Returns whether the scene changed.
    pub fn pointer_move(&mut self, scene: &mut Scene, device: Pos2) -> bool {
        let pos = self.viewport.device_to_document(device);

        match self.state {
            InteractionState::Idle => false,
            InteractionState::Drawing { id } => {
                let patch = match scene.get_element(id) {
                    Some(ElementType::Stroke(_)) => ElementPatch::AppendPoint(pos),
                    Some(element) => extent_patch(element, pos),
                    None => return false,
                };
                scene.update_element(id, patch)
            }
            InteractionState::Moving { id, last } => {
                self.state = InteractionState::Moving { id, last: pos };
                scene.update_element(id, ElementPatch::Translate(pos - last))
            }
            InteractionState::Resizing { id } => match scene.get_element(id) {
                Some(element) => {
                    let patch = extent_patch(element, pos);
                    scene.update_element(id, patch)
                }
                None => false,
            },
        }
    }

    /// Finish the gesture. Degenerate elements are removed here.
    pub fn pointer_up(&mut self, scene: &mut Scene) -> GestureOutcome {
        let Some(id) = self.state.active_element() else {
            return GestureOutcome::Ignored;
        };
        self.state = InteractionState::Idle;

        let Some(element) = scene.get_element(id) else {
            debug!("Gesture element {} vanished before pointer up", id);
            self.retain_selection(scene);
            return GestureOutcome::Vanished(id);
        };

        if let Err(err) = element.validate() {
            debug!("{}", err);
            scene.remove_element(id);
            self.retain_selection(scene);
            return GestureOutcome::Discarded(id);
        }

        GestureOutcome::Committed(id)
    }

    fn begin_select(&mut self, scene: &Scene, pos: Pos2, config: &EditorConfig) {
        if let Some(id) = self.resize_handle_at(scene, pos, config.handle_size) {
            debug!("Resizing {}", id);
            self.selection = Some(id);
            self.state = InteractionState::Resizing { id };
            return;
        }

        match scene.hit_test(pos, config.hit_tolerance) {
            Some(element) => {
                let id = element.id();
                debug!("Moving {} {}", element.element_type(), id);
                self.selection = Some(id);
                self.state = InteractionState::Moving { id, last: pos };
            }
            None => self.selection = None,
        }
    }

    /// Only the selected element offers a handle, and strokes never do.
    fn resize_handle_at(&self, scene: &Scene, pos: Pos2, handle_size: f32) -> Option<ElementId> {
        let element = scene.get_element(self.selection?)?;
        (element.is_resizable() && geometry::is_point_near_handle(pos, element.bounds().corner(), handle_size))
            .then(|| element.id())
    }
}

/// Stretch a box from its anchor to `pos`.
fn extent_patch(element: &ElementType, pos: Pos2) -> ElementPatch {
    let anchor = element.bounds().anchor();
    ElementPatch::SetExtent {
        width: pos.x - anchor.x,
        height: pos.y - anchor.y,
    }
}
