use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

mod common;
pub(crate) mod shape;
pub(crate) mod stroke;

pub use common::{DEFAULT_STROKE_COLOR, MIN_STROKE_POINTS};
pub use shape::BoxShape;
pub use stroke::Stroke;

use crate::error::{EngineError, EngineResult};
use crate::geometry::{self, Bounds};
use crate::id_generator::ElementId;

/// Common trait that all annotation elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    fn stroke_color(&self) -> Color32;

    /// Anchored bounds in document coordinates. Strokes derive them from their points.
    fn bounds(&self) -> Bounds;

    /// Sign-normalised bounding rectangle
    fn rect(&self) -> Rect;

    /// Test if the element's shape contains the given position
    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool;

    /// Translate the whole element by the given delta
    fn translate(&mut self, delta: Vec2);

    /// True when the element has nothing worth keeping (single-point stroke, zero-area box)
    fn is_degenerate(&self) -> bool;
}

/// Enumeration of all element types in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementType {
    Stroke(Stroke),
    Rectangle(BoxShape),
    Ellipse(BoxShape),
}

/// A single structural change to one element.
///
/// Patches that make no sense for a variant (appending a point to a
/// rectangle, for instance) leave the element untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementPatch {
    Translate(Vec2),
    AppendPoint(Pos2),
    SetExtent { width: f32, height: f32 },
    SetColor(Color32),
}

impl ElementType {
    /// Whether the element exposes a resize handle. Strokes are only movable.
    pub fn is_resizable(&self) -> bool {
        !matches!(self, ElementType::Stroke(_))
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            ElementType::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_box(&self) -> Option<&BoxShape> {
        match self {
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => Some(b),
            ElementType::Stroke(_) => None,
        }
    }

    /// Apply a patch in place. Returns whether anything changed.
    pub fn apply(&mut self, patch: ElementPatch) -> bool {
        match (self, patch) {
            (element, ElementPatch::Translate(delta)) => {
                element.translate(delta);
                true
            }
            (ElementType::Stroke(s), ElementPatch::AppendPoint(pos)) => {
                s.push_point(pos);
                true
            }
            (ElementType::Rectangle(b) | ElementType::Ellipse(b), ElementPatch::SetExtent { width, height }) => {
                b.set_extent(width, height);
                true
            }
            (ElementType::Stroke(s), ElementPatch::SetColor(color)) => {
                s.set_color(color);
                true
            }
            (ElementType::Rectangle(b) | ElementType::Ellipse(b), ElementPatch::SetColor(color)) => {
                b.set_color(color);
                true
            }
            _ => false,
        }
    }

    /// Rejects elements that must not be committed.
    pub fn validate(&self) -> EngineResult<()> {
        if self.is_degenerate() {
            Err(EngineError::DegenerateElement(self.id()))
        } else {
            Ok(())
        }
    }
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        match self {
            ElementType::Stroke(s) => s.id(),
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Stroke(s) => s.element_type(),
            ElementType::Rectangle(_) => "rectangle",
            ElementType::Ellipse(_) => "ellipse",
        }
    }

    fn stroke_color(&self) -> Color32 {
        match self {
            ElementType::Stroke(s) => s.stroke_color(),
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.color(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            ElementType::Stroke(s) => s.bounds(),
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.bounds(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementType::Stroke(s) => s.rect(),
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.rect(),
        }
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        match self {
            ElementType::Stroke(s) => s.hit_test(pos, tolerance),
            ElementType::Rectangle(b) => geometry::point_in_rectangle(pos, &b.bounds()),
            ElementType::Ellipse(b) => geometry::point_in_ellipse(pos, &b.bounds()),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            ElementType::Stroke(s) => s.translate(delta),
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.translate(delta),
        }
    }

    fn is_degenerate(&self) -> bool {
        match self {
            ElementType::Stroke(s) => s.is_degenerate(),
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.is_degenerate(),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::id_generator::generate_id;

    /// Create a stroke from existing points with a fresh id
    pub fn create_stroke(points: Vec<Pos2>, color: Color32) -> ElementType {
        ElementType::Stroke(Stroke::new(generate_id(), points, color))
    }

    /// Create a rectangle with a fresh id
    pub fn create_rectangle(bounds: Bounds, color: Color32) -> ElementType {
        ElementType::Rectangle(BoxShape::new(generate_id(), bounds, color))
    }

    /// Create an ellipse with a fresh id
    pub fn create_ellipse(bounds: Bounds, color: Color32) -> ElementType {
        ElementType::Ellipse(BoxShape::new(generate_id(), bounds, color))
    }
}
