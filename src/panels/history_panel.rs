use crate::NotesApp;
use crate::util::time::format_time_of_day;

/// The "Time Machine": every snapshot with its time and reason, newest first.
/// Clicking an entry restores it.
pub fn history_panel(app: &mut NotesApp, ctx: &egui::Context) {
    let NotesApp {
        context,
        show_history,
        ..
    } = app;

    let mut restore = None;

    egui::Window::new("Time Machine")
        .open(show_history)
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            let history = context.history();
            let cursor = history.cursor();

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                egui::Grid::new("history_grid")
                    .num_columns(3)
                    .spacing([12.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (index, entry) in history.entries().enumerate().rev() {
                            ui.monospace(format_time_of_day(entry.timestamp_ms()));
                            let label = format!("{} ({} items)", entry.reason(), entry.scene().len());
                            if ui.selectable_label(index == cursor, label).clicked() && index != cursor {
                                restore = Some(index);
                            }
                            ui.label(if index == cursor { "◀" } else { "" });
                            ui.end_row();
                        }
                    });
            });
        });

    if let Some(index) = restore {
        if let Err(err) = context.restore(index) {
            log::warn!("{}", err);
        }
    }
}
