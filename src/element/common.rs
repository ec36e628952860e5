use egui::Color32;

/// Default outline colour for new annotations.
pub const DEFAULT_STROKE_COLOR: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88);

/// Freehand strokes need at least this many points to be kept.
pub const MIN_STROKE_POINTS: usize = 2;
