use egui::{Pos2, Vec2};

/// Host viewport geometry used to map device pixels onto the document.
///
/// `origin` is the top-left of the visible canvas area in screen points,
/// `scroll_offset` is how far the document is scrolled under it, and
/// `pixels_per_point` is the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: Pos2,
    pub scroll_offset: Vec2,
    pub size: Vec2,
    pub pixels_per_point: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            scroll_offset: Vec2::ZERO,
            size: Vec2::ZERO,
            pixels_per_point: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(origin: Pos2, scroll_offset: Vec2, size: Vec2, pixels_per_point: f32) -> Self {
        Self {
            origin,
            scroll_offset,
            size,
            pixels_per_point: if pixels_per_point > 0.0 { pixels_per_point } else { 1.0 },
        }
    }

    /// Device pixels to document coordinates.
    pub fn device_to_document(&self, device: Pos2) -> Pos2 {
        let screen = Pos2::new(device.x / self.pixels_per_point, device.y / self.pixels_per_point);
        screen - self.origin.to_vec2() + self.scroll_offset
    }

    /// Screen points (what egui reports) to device pixels.
    pub fn screen_to_device(&self, screen: Pos2) -> Pos2 {
        Pos2::new(screen.x * self.pixels_per_point, screen.y * self.pixels_per_point)
    }

    /// Offset that moves document-space shapes to their on-screen position.
    pub fn document_to_screen(&self) -> Vec2 {
        self.origin.to_vec2() - self.scroll_offset
    }

    /// Backing buffer size in physical pixels for a canvas covering the viewport.
    pub fn buffer_size(&self) -> [u32; 2] {
        [
            (self.size.x * self.pixels_per_point).round().max(0.0) as u32,
            (self.size.y * self.pixels_per_point).round().max(0.0) as u32,
        ]
    }
}
