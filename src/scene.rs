use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementPatch, ElementType};
use crate::id_generator::ElementId;

/// The z-ordered collection of annotation elements.
///
/// Index 0 is drawn first; the last element is on top and is hit-tested first.
/// Ids are unique within a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ElementType>", into = "Vec<ElementType>")]
pub struct Scene {
    elements: Vec<ElementType>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an element on top of the scene.
    ///
    /// An element whose id is already present replaces the old one in place,
    /// keeping its z-position.
    pub fn add_element(&mut self, element: ElementType) {
        match self.position(element.id()) {
            Some(index) => {
                log::warn!("Replacing element {} that was added twice", element.id());
                self.elements[index] = element;
            }
            None => self.elements.push(element),
        }
    }

    /// Apply `patch` to the element with `id`. Unknown ids are a no-op.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        match self.elements.iter_mut().find(|e| e.id() == id) {
            Some(element) => element.apply(patch),
            None => {
                log::debug!("Ignoring {:?} for missing element {}", patch, id);
                false
            }
        }
    }

    pub fn remove_element(&mut self, id: ElementId) -> Option<ElementType> {
        let index = self.position(id)?;
        Some(self.elements.remove(index))
    }

    pub fn get_element(&self, id: ElementId) -> Option<&ElementType> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate bottom to top (draw order).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ElementType> {
        self.elements.iter()
    }

    /// Iterate top to bottom (hit-test order).
    pub fn iter_top_down(&self) -> impl Iterator<Item = &ElementType> {
        self.elements.iter().rev()
    }

    /// The top-most element whose shape contains `pos`.
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> Option<&ElementType> {
        self.iter_top_down().find(|e| e.hit_test(pos, tolerance))
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }
}

impl FromIterator<ElementType> for Scene {
    fn from_iter<I: IntoIterator<Item = ElementType>>(iter: I) -> Self {
        let mut scene = Scene::new();
        for element in iter {
            scene.add_element(element);
        }
        scene
    }
}

// Deserialization goes through `add_element` so duplicate ids cannot sneak in.
impl From<Vec<ElementType>> for Scene {
    fn from(elements: Vec<ElementType>) -> Self {
        elements.into_iter().collect()
    }
}

impl From<Scene> for Vec<ElementType> {
    fn from(scene: Scene) -> Self {
        scene.elements
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a ElementType;
    type IntoIter = std::slice::Iter<'a, ElementType>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
