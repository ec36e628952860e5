use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Anchored bounding box in document coordinates.
///
/// `x, y` is the corner where the shape was started. `width` and `height`
/// keep the sign of the drag, so the box may extend up or left of its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A zero-sized box anchored at `pos`.
    pub fn at(pos: Pos2) -> Self {
        Self::new(pos.x, pos.y, 0.0, 0.0)
    }

    pub fn anchor(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// The corner opposite the anchor. This is where the resize handle lives.
    pub fn corner(&self) -> Pos2 {
        Pos2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Sign-normalised rectangle covering the same area.
    pub fn to_rect(&self) -> Rect {
        Rect::from_two_pos(self.anchor(), self.corner())
    }

    /// Stretch the box from its anchor to `pos`. The sign flips when `pos`
    /// crosses the anchor.
    pub fn extend_to(&mut self, pos: Pos2) {
        self.width = pos.x - self.x;
        self.height = pos.y - self.y;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    pub fn has_zero_area(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min.x, rect.min.y, rect.width(), rect.height())
    }
}
