use egui::{Button, Slider};

use crate::NotesApp;
use crate::components::ToolButton;
use crate::history::CheckpointReason;
use crate::tools::Tool;

pub fn tools_panel(app: &mut NotesApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Notes");

            let mut drawing = app.context.drawing_mode();
            let label = if drawing { "✏ Drawing" } else { "📝 Typing" };
            if ui.toggle_value(&mut drawing, label).changed() {
                if !drawing {
                    app.input.reset();
                }
                app.context.set_drawing_mode(drawing);
            }

            ui.separator();

            ui.horizontal(|ui| {
                let active = app.context.tool();
                for tool in Tool::ALL {
                    let button = ToolButton::new(tool, tool == active).enabled(drawing);
                    if button.show(ui).clicked() {
                        app.context.set_tool(tool);
                    }
                }
            });

            let has_selection = app.context.selection().is_some();
            if ui
                .add_enabled(drawing && has_selection, Button::new("🗑 Delete"))
                .clicked()
            {
                app.context.delete_selected();
            }

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.context.history().can_undo();
                let can_redo = app.context.history().can_redo();

                if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                    app.context.undo();
                }
                if ui.add_enabled(can_redo, Button::new("Redo")).clicked() {
                    app.context.redo();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    app.context.checkpoint(CheckpointReason::Manual);
                }
                if ui.selectable_label(app.show_history, "🕒 History").clicked() {
                    app.toggle_history();
                }
            });

            ui.separator();

            let history = app.context.history();
            ui.label(format!("Elements: {}", app.context.scene().len()));
            ui.label(format!(
                "History: {}/{} (at {})",
                history.len(),
                history.capacity(),
                history.cursor()
            ));
            ui.label(format!("State: {}", app.context.state().name()));

            ui.separator();

            egui::CollapsingHeader::new("Settings").show(ui, |ui| {
                let mut config = app.context.config().clone();
                ui.add(Slider::new(&mut config.history_capacity, 1..=100).text("History size"));
                ui.add(Slider::new(&mut config.hit_tolerance, 1.0..=30.0).text("Hit tolerance"));
                ui.add(Slider::new(&mut config.handle_size, 5.0..=40.0).text("Handle size"));
                ui.add(Slider::new(&mut config.ellipse_segments, 8..=128).text("Ellipse segments"));
                ui.add(Slider::new(&mut config.canvas_height, 500.0..=8000.0).text("Canvas height"));
                ui.horizontal(|ui| {
                    ui.color_edit_button_srgba(&mut config.stroke_color);
                    ui.label("Ink");
                    ui.color_edit_button_srgba(&mut config.selection_color);
                    ui.label("Selection");
                });

                if &config != app.context.config() {
                    app.context.set_config(config);
                }
            });
        });
}
