use egui::{Color32, Pos2, Vec2};
use ink_notes::element::{Element, ElementPatch, ElementType, factory};
use ink_notes::geometry::Bounds;
use ink_notes::id_generator::generate_id;
use ink_notes::{Document, Scene};

fn create_test_scene() -> (Scene, ElementType, ElementType) {
    let rect = factory::create_rectangle(Bounds::new(0.0, 0.0, 100.0, 100.0), Color32::RED);
    let ellipse = factory::create_ellipse(Bounds::new(50.0, 50.0, 100.0, 100.0), Color32::BLUE);

    let mut scene = Scene::new();
    scene.add_element(rect.clone());
    scene.add_element(ellipse.clone());
    (scene, rect, ellipse)
}

#[test]
fn test_element_creation() {
    let stroke = factory::create_stroke(vec![Pos2::new(10.0, 10.0), Pos2::new(20.0, 20.0)], Color32::RED);
    assert_eq!(stroke.element_type(), "stroke");
    assert!(!stroke.is_resizable());
    assert!(stroke.validate().is_ok());

    let rect = factory::create_rectangle(Bounds::new(1.0, 2.0, 3.0, 4.0), Color32::RED);
    assert_eq!(rect.element_type(), "rectangle");
    assert!(rect.is_resizable());
    assert_ne!(stroke.id(), rect.id());
}

#[test]
fn test_degenerate_elements() {
    let dot = factory::create_stroke(vec![Pos2::new(5.0, 5.0)], Color32::RED);
    assert!(dot.is_degenerate());
    assert!(dot.validate().is_err());

    let line = factory::create_rectangle(Bounds::new(0.0, 0.0, 40.0, 0.0), Color32::RED);
    assert!(line.is_degenerate());

    let flipped = factory::create_ellipse(Bounds::new(0.0, 0.0, -40.0, -10.0), Color32::RED);
    assert!(!flipped.is_degenerate());
}

#[test]
fn test_add_and_remove() {
    let (mut scene, rect, ellipse) = create_test_scene();
    assert_eq!(scene.len(), 2);
    assert!(scene.contains(rect.id()));

    let removed = scene.remove_element(rect.id()).unwrap();
    assert_eq!(removed, rect);
    assert_eq!(scene.len(), 1);
    assert!(scene.remove_element(rect.id()).is_none());
    assert_eq!(scene.get_element(ellipse.id()), Some(&ellipse));
}

#[test]
fn test_add_duplicate_id_replaces_in_place() {
    let (mut scene, rect, ellipse) = create_test_scene();

    let mut moved = rect.clone();
    moved.translate(Vec2::new(500.0, 0.0));
    scene.add_element(moved.clone());

    assert_eq!(scene.len(), 2);
    let order: Vec<_> = scene.iter().map(|e| e.id()).collect();
    assert_eq!(order, vec![rect.id(), ellipse.id()]);
    assert_eq!(scene.get_element(rect.id()), Some(&moved));
}

#[test]
fn test_update_element() {
    let (mut scene, rect, _) = create_test_scene();

    assert!(scene.update_element(rect.id(), ElementPatch::Translate(Vec2::new(10.0, 5.0))));
    assert_eq!(scene.get_element(rect.id()).unwrap().bounds().anchor(), Pos2::new(10.0, 5.0));

    assert!(scene.update_element(rect.id(), ElementPatch::SetExtent { width: -20.0, height: 30.0 }));
    let bounds = scene.get_element(rect.id()).unwrap().bounds();
    assert_eq!((bounds.width, bounds.height), (-20.0, 30.0));

    // Points only make sense for strokes
    assert!(!scene.update_element(rect.id(), ElementPatch::AppendPoint(Pos2::ZERO)));
}

#[test]
fn test_update_unknown_id_is_noop() {
    let (mut scene, _, _) = create_test_scene();
    let before = scene.clone();

    assert!(!scene.update_element(generate_id(), ElementPatch::Translate(Vec2::new(1.0, 1.0))));
    assert_eq!(scene, before);
}

#[test]
fn test_hit_test_prefers_topmost() {
    let (scene, rect, ellipse) = create_test_scene();

    // Overlap: the ellipse was added last
    let hit = scene.hit_test(Pos2::new(90.0, 90.0), 10.0).unwrap();
    assert_eq!(hit.id(), ellipse.id());

    let hit = scene.hit_test(Pos2::new(10.0, 10.0), 10.0).unwrap();
    assert_eq!(hit.id(), rect.id());

    assert!(scene.hit_test(Pos2::new(400.0, 400.0), 10.0).is_none());
}

#[test]
fn test_stroke_translate_moves_every_point() {
    let mut stroke = factory::create_stroke(
        vec![Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0), Pos2::new(20.0, 5.0)],
        Color32::RED,
    );
    stroke.translate(Vec2::new(3.0, 4.0));

    let points = stroke.as_stroke().unwrap().points();
    assert_eq!(points, &[Pos2::new(3.0, 4.0), Pos2::new(13.0, 4.0), Pos2::new(23.0, 9.0)]);

    let rect = stroke.rect();
    assert_eq!(rect.min, Pos2::new(3.0, 4.0));
    assert_eq!(rect.max, Pos2::new(23.0, 9.0));
}

#[test]
fn test_document_json_round_trip() {
    let (scene, _, _) = create_test_scene();
    let mut scene = scene;
    scene.add_element(factory::create_stroke(
        vec![Pos2::new(1.0, 1.0), Pos2::new(2.0, 3.0)],
        Color32::GREEN,
    ));
    let document = Document::with_scene("# Meeting notes\n- item", scene);

    let json = document.to_json().unwrap();
    assert!(json.contains("\"type\": \"rectangle\""));
    assert!(json.contains("\"type\": \"stroke\""));

    let restored = Document::from_json(&json).unwrap();
    assert_eq!(restored, document);
}

#[test]
fn test_document_from_bad_json() {
    assert!(Document::from_json("{ not json").is_err());
}
