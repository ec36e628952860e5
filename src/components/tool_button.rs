use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, vec2};

use crate::tools::Tool;

const ACCENT: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88);

/// Square icon button for picking a drawing tool.
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
    pub enabled: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self {
            tool,
            selected,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(32.0, 32.0), sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                ACCENT
            } else if self.enabled && response.hovered() {
                Color32::from_gray(60)
            } else {
                Color32::from_gray(40)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = match (self.enabled, self.selected) {
                (false, _) => Color32::from_gray(100),
                (true, true) => Color32::WHITE,
                (true, false) => Color32::from_gray(210),
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.tool.icon(),
                FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter()
                    .rect_stroke(rect, 4.0, Stroke::new(2.0, Color32::from_rgb(0x2d, 0xd4, 0xbf)));
            }
        }

        response.on_hover_text(self.tool.name())
    }
}
