use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::id_generator::ElementId;

/// Box-defined annotation, shared by rectangles and ellipses.
///
/// Which outline it draws and how it is hit-tested is decided by the
/// `ElementType` variant holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    id: ElementId,
    bounds: Bounds,
    color: Color32,
}

impl BoxShape {
    pub fn new(id: ElementId, bounds: Bounds, color: Color32) -> Self {
        Self { id, bounds, color }
    }

    /// Zero-sized box anchored at `pos`, ready to be stretched by a drag.
    pub fn anchored_at(id: ElementId, pos: Pos2, color: Color32) -> Self {
        Self::new(id, Bounds::at(pos), color)
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn rect(&self) -> Rect {
        self.bounds.to_rect()
    }

    pub(crate) fn set_extent(&mut self, width: f32, height: f32) {
        self.bounds.width = width;
        self.bounds.height = height;
    }

    pub(crate) fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.bounds.translate(delta);
    }

    pub fn is_degenerate(&self) -> bool {
        self.bounds.has_zero_area()
    }
}
