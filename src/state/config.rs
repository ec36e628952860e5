use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::DEFAULT_STROKE_COLOR;
use crate::geometry::hit_testing::{RESIZE_HANDLE_SIZE, STROKE_HIT_TOLERANCE};
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Tunables for the annotation layer. Persisted with the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Maximum number of history snapshots kept
    pub history_capacity: usize,
    /// Pick distance around freehand strokes, in document units
    pub hit_tolerance: f32,
    /// Half-extent of the resize handle region, in document units
    pub handle_size: f32,
    /// Colour given to newly drawn elements
    pub stroke_color: Color32,
    /// Outline colour of the selected element
    pub selection_color: Color32,
    /// Vertices used to approximate an ellipse outline
    pub ellipse_segments: usize,
    /// Height of the drawable area below the top of the document
    pub canvas_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            hit_tolerance: STROKE_HIT_TOLERANCE,
            handle_size: RESIZE_HANDLE_SIZE,
            stroke_color: DEFAULT_STROKE_COLOR,
            selection_color: Color32::from_rgb(0x2d, 0xd4, 0xbf),
            ellipse_segments: 64,
            canvas_height: 2000.0,
        }
    }
}
