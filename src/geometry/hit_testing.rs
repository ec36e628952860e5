use egui::{Pos2, Rect};

use super::Bounds;

/// Default pick tolerance around freehand strokes, in document units.
pub const STROKE_HIT_TOLERANCE: f32 = 10.0;
/// Default half-extent of the square resize handle region, in document units.
pub const RESIZE_HANDLE_SIZE: f32 = 20.0;

pub fn distance(p1: Pos2, p2: Pos2) -> f32 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// True when `pos` lies strictly within `max_dist` of the segment `a`-`b`.
///
/// The projection onto the line is clamped to the segment, so points beyond
/// either end are measured against the nearest endpoint. A zero-length
/// segment is treated as the point `a`.
pub fn point_near_segment(pos: Pos2, a: Pos2, b: Pos2, max_dist: f32) -> bool {
    let seg = b - a;
    let rel = pos - a;
    let len_sq = seg.x * seg.x + seg.y * seg.y;

    let nearest = if len_sq == 0.0 {
        a
    } else {
        let t = ((rel.x * seg.x + rel.y * seg.y) / len_sq).clamp(0.0, 1.0);
        a + seg * t
    };

    let dx = pos.x - nearest.x;
    let dy = pos.y - nearest.y;
    dx * dx + dy * dy < max_dist * max_dist
}

/// Inclusive containment against the sign-normalised box.
pub fn point_in_rectangle(pos: Pos2, bounds: &Bounds) -> bool {
    let min_x = bounds.x.min(bounds.x + bounds.width);
    let max_x = bounds.x.max(bounds.x + bounds.width);
    let min_y = bounds.y.min(bounds.y + bounds.height);
    let max_y = bounds.y.max(bounds.y + bounds.height);

    pos.x >= min_x && pos.x <= max_x && pos.y >= min_y && pos.y <= max_y
}

/// Containment in the ellipse inscribed in `bounds`, boundary included.
pub fn point_in_ellipse(pos: Pos2, bounds: &Bounds) -> bool {
    let rx = bounds.width.abs() / 2.0;
    let ry = bounds.height.abs() / 2.0;
    if rx == 0.0 || ry == 0.0 {
        return false;
    }

    let center = bounds.center();
    let nx = (pos.x - center.x) / rx;
    let ny = (pos.y - center.y) / ry;
    nx * nx + ny * ny <= 1.0
}

pub fn point_in_stroke(pos: Pos2, points: &[Pos2], tolerance: f32) -> bool {
    points
        .windows(2)
        .any(|pair| point_near_segment(pos, pair[0], pair[1], tolerance))
}

/// Square handle test around `corner`. Strict on both axes.
pub fn is_point_near_handle(pos: Pos2, corner: Pos2, handle_size: f32) -> bool {
    (pos.x - corner.x).abs() < handle_size && (pos.y - corner.y).abs() < handle_size
}

/// Tight bounding box of a point list, `None` when empty.
pub fn stroke_bounds(points: &[Pos2]) -> Option<Rect> {
    let first = *points.first()?;
    let rect = points
        .iter()
        .fold(Rect::from_min_max(first, first), |rect, p| rect.union(Rect::from_min_max(*p, *p)));
    Some(rect)
}
