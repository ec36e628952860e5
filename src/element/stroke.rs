use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::Element;
use super::common::MIN_STROKE_POINTS;
use crate::geometry::{self, Bounds};
use crate::id_generator::ElementId;

/// Freehand stroke: a polyline of points in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: ElementId,
    points: Vec<Pos2>,
    color: Color32,
}

impl Stroke {
    pub fn new(id: ElementId, points: Vec<Pos2>, color: Color32) -> Self {
        Self { id, points, color }
    }

    /// Start a stroke at a single point.
    pub fn starting_at(id: ElementId, pos: Pos2, color: Color32) -> Self {
        Self::new(id, vec![pos], color)
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub(crate) fn push_point(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub(crate) fn set_color(&mut self, color: Color32) {
        self.color = color;
    }
}

impl Element for Stroke {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn stroke_color(&self) -> Color32 {
        self.color
    }

    fn bounds(&self) -> Bounds {
        geometry::stroke_bounds(&self.points).map_or_else(Bounds::default, Bounds::from)
    }

    fn rect(&self) -> Rect {
        geometry::stroke_bounds(&self.points).unwrap_or(Rect::NOTHING)
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        geometry::point_in_stroke(pos, &self.points, tolerance)
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    fn is_degenerate(&self) -> bool {
        self.points.len() < MIN_STROKE_POINTS
    }
}
