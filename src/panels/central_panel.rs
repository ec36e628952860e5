use egui::{Rect, Sense, TextEdit, vec2};

use crate::NotesApp;
use crate::input::{Viewport, route_event};
use crate::state::GestureOutcome;

/// Scrolling text editor with the annotation overlay painted on top.
///
/// In drawing mode the text is read-only and pointer input goes to the
/// annotation engine instead.
pub fn central_panel(app: &mut NotesApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let drawing = app.context.drawing_mode();

        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .drag_to_scroll(!drawing)
            .show_viewport(ui, |ui, visible_rect| {
                let content_origin = ui.max_rect().min;
                let width = ui.available_width();
                let canvas_height = app.context.config().canvas_height;

                ui.add_enabled(
                    !drawing,
                    TextEdit::multiline(app.context.text_mut())
                        .desired_width(f32::INFINITY)
                        .desired_rows(12)
                        .hint_text("Start typing, or switch to drawing mode to annotate."),
                );

                let height = canvas_height.max(ui.min_rect().height());
                let canvas_rect = Rect::from_min_size(content_origin, vec2(width, height));
                ui.allocate_rect(canvas_rect, Sense::hover());

                let viewport = Viewport::new(
                    content_origin + visible_rect.min.to_vec2(),
                    visible_rect.min.to_vec2(),
                    visible_rect.size(),
                    ctx.pixels_per_point(),
                );
                app.context.set_viewport(viewport);

                if drawing {
                    let hit_rect = canvas_rect.intersect(ui.clip_rect());
                    let events = app.input.process_input(ctx, hit_rect, &viewport);
                    for event in events {
                        if let GestureOutcome::Discarded(id) = route_event(&mut app.context, event) {
                            log::debug!("Dropped empty element {}", id);
                        }
                    }
                } else {
                    app.input.reset();
                }

                let offset = viewport.document_to_screen();
                let shapes = app.context.display_list().into_iter().map(|mut shape| {
                    shape.translate(offset);
                    shape
                });
                ui.painter().extend(shapes);
            });
    });
}
