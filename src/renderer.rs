// src/renderer.rs
use egui::{Color32, Pos2, Rect, Shape, Stroke as LineStroke, Vec2};

use crate::element::{Element, ElementType};
use crate::geometry::Bounds;
use crate::id_generator::ElementId;
use crate::scene::Scene;
use crate::state::EditorConfig;

/// Visual parameters for the annotation layer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub line_width: f32,
    pub selected_line_width: f32,
    pub selection_color: Color32,
    /// Gap between a selected box and its dashed outline
    pub outline_padding: f32,
    pub outline_color: Color32,
    pub dash_length: f32,
    pub gap_length: f32,
    /// Side of the square resize handle drawn on the selected box
    pub handle_size: f32,
    pub handle_color: Color32,
    pub ellipse_segments: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for RenderStyle {
    fn from(config: &EditorConfig) -> Self {
        Self {
            line_width: 2.0,
            selected_line_width: 3.0,
            selection_color: config.selection_color,
            outline_padding: 5.0,
            outline_color: Color32::from_white_alpha(128),
            dash_length: 5.0,
            gap_length: 5.0,
            handle_size: 10.0,
            handle_color: Color32::WHITE,
            ellipse_segments: config.ellipse_segments.max(8),
        }
    }
}

/// Turns a scene and its selection into a display list.
///
/// Rendering is a pure read: it may run every frame or only after changes.
/// Shapes are in document coordinates; translate them by
/// `Viewport::document_to_screen` before painting.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn display_list(&self, scene: &Scene, selection: Option<ElementId>) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(scene.len() + 6);

        for element in scene.iter() {
            let selected = selection == Some(element.id());
            let stroke = if selected {
                LineStroke::new(self.style.selected_line_width, self.style.selection_color)
            } else {
                LineStroke::new(self.style.line_width, element.stroke_color())
            };

            match element {
                ElementType::Stroke(s) => {
                    if s.points().len() > 1 {
                        shapes.push(Shape::line(s.points().to_vec(), stroke));
                    }
                }
                ElementType::Rectangle(b) => {
                    shapes.push(Shape::closed_line(rect_corners(b.rect()).to_vec(), stroke));
                }
                ElementType::Ellipse(b) => {
                    if let Some(points) = ellipse_points(&b.bounds(), self.style.ellipse_segments) {
                        shapes.push(Shape::closed_line(points, stroke));
                    }
                }
            }

            if selected && element.is_resizable() {
                self.push_selection_frame(&mut shapes, element);
            }
        }

        shapes
    }

    fn push_selection_frame(&self, shapes: &mut Vec<Shape>, element: &ElementType) {
        let frame = element.rect().expand(self.style.outline_padding);
        let [a, b, c, d] = rect_corners(frame);
        shapes.extend(Shape::dashed_line(
            &[a, b, c, d, a],
            LineStroke::new(1.0, self.style.outline_color),
            self.style.dash_length,
            self.style.gap_length,
        ));

        let handle = Rect::from_center_size(element.bounds().corner(), Vec2::splat(self.style.handle_size));
        shapes.push(Shape::rect_filled(handle, 0.0, self.style.handle_color));
    }
}

fn rect_corners(rect: Rect) -> [Pos2; 4] {
    [rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()]
}

/// Polygon approximating the ellipse inscribed in `bounds`.
fn ellipse_points(bounds: &Bounds, segments: usize) -> Option<Vec<Pos2>> {
    let rx = bounds.width.abs() / 2.0;
    let ry = bounds.height.abs() / 2.0;
    if rx == 0.0 && ry == 0.0 {
        return None;
    }

    let center = bounds.center();
    let points = (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            Pos2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect();
    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;

    fn rectangle_scene() -> (Scene, ElementId) {
        let rect = factory::create_rectangle(Bounds::new(10.0, 10.0, 50.0, 30.0), Color32::RED);
        let id = rect.id();
        let mut scene = Scene::new();
        scene.add_element(rect);
        (scene, id)
    }

    #[test]
    fn test_unselected_rectangle_is_one_outline() {
        let (scene, _) = rectangle_scene();
        let shapes = Renderer::default().display_list(&scene, None);
        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Path(path) => {
                assert!(path.closed);
                assert_eq!(path.points.len(), 4);
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_selected_rectangle_gets_frame_and_handle() {
        let (scene, id) = rectangle_scene();
        let shapes = Renderer::default().display_list(&scene, Some(id));

        // outline + at least one dash + handle
        assert!(shapes.len() >= 3);
        match shapes.last() {
            Some(Shape::Rect(handle)) => {
                assert_eq!(handle.rect.center(), Pos2::new(60.0, 40.0));
                assert_eq!(handle.rect.width(), 10.0);
            }
            other => panic!("expected the handle last, got {other:?}"),
        }
    }

    #[test]
    fn test_selected_stroke_has_no_handle() {
        let stroke = factory::create_stroke(vec![Pos2::new(0.0, 0.0), Pos2::new(10.0, 5.0)], Color32::RED);
        let id = stroke.id();
        let mut scene = Scene::new();
        scene.add_element(stroke);

        let shapes = Renderer::default().display_list(&scene, Some(id));
        assert_eq!(shapes.len(), 1);
    }

    #[test]
    fn test_single_point_stroke_draws_nothing() {
        let mut scene = Scene::new();
        scene.add_element(factory::create_stroke(vec![Pos2::new(3.0, 3.0)], Color32::RED));
        assert!(Renderer::default().display_list(&scene, None).is_empty());
    }

    #[test]
    fn test_ellipse_vertices_follow_segments() {
        let mut scene = Scene::new();
        scene.add_element(factory::create_ellipse(Bounds::new(0.0, 0.0, -40.0, 20.0), Color32::RED));
        let renderer = Renderer::default();
        let shapes = renderer.display_list(&scene, None);
        match &shapes[0] {
            Shape::Path(path) => assert_eq!(path.points.len(), renderer.style().ellipse_segments),
            other => panic!("expected a path, got {other:?}"),
        }
    }
}
