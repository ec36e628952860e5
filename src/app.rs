use egui::{Key, KeyboardShortcut, Modifiers};

use crate::input::InputHandler;
use crate::panels::{central_panel, history_panel, tools_panel};
use crate::state::{EditorContext, load_session, save_session};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers { shift: true, ..Modifiers::COMMAND }, Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The notes editor: a text document with a freehand/shape annotation layer.
pub struct NotesApp {
    pub(crate) context: EditorContext,
    pub(crate) input: InputHandler,
    pub(crate) show_history: bool,
}

impl Default for NotesApp {
    fn default() -> Self {
        Self::with_context(EditorContext::default())
    }
}

impl NotesApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_context(load_session(cc.storage))
    }

    pub fn with_context(context: EditorContext) -> Self {
        Self {
            context,
            input: InputHandler::new(),
            show_history: false,
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EditorContext {
        &mut self.context
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Redo first: the undo shortcut also matches with Shift held.
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT);
            (redo, i.consume_shortcut(&UNDO))
        });
        if redo {
            self.context.redo();
        } else if undo {
            self.context.undo();
        }

        if !self.context.drawing_mode() {
            return;
        }

        let (delete, escape) = ctx.input_mut(|i| {
            let delete = i.consume_key(Modifiers::NONE, Key::Delete) || i.consume_key(Modifiers::NONE, Key::Backspace);
            (delete, i.consume_key(Modifiers::NONE, Key::Escape))
        });
        if delete {
            self.context.delete_selected();
        }
        if escape {
            self.input.reset();
            self.context.set_drawing_mode(false);
        }
    }
}

impl eframe::App for NotesApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        save_session(storage, &self.context);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        history_panel(self, ctx);
        central_panel(self, ctx);
    }
}
