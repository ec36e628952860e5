use egui::{Context, PointerButton, Pos2, Rect};

mod router;
mod viewport;

pub use router::route_event;
pub use viewport::Viewport;

/// Pointer/touch input in device pixels, as delivered to the annotation engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Move(Pos2),
    Up,
}

/// Converts raw egui input over the canvas into `PointerEvent`s.
///
/// egui folds touch input into the primary pointer, so mouse and touch share
/// this path.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press that started on the canvas is still held.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Process this frame's input. Presses only count inside `canvas_rect`;
    /// moves and the release are tracked anywhere once a press has begun.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect, viewport: &Viewport) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.interact_pos();

            if !self.pressed && input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos.filter(|p| canvas_rect.contains(*p)) {
                    events.push(PointerEvent::Down(viewport.screen_to_device(pos)));
                    self.pressed = true;
                    self.last_pointer_pos = Some(pos);
                }
            }

            if self.pressed {
                if let Some(pos) = pos {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(PointerEvent::Move(viewport.screen_to_device(pos)));
                        self.last_pointer_pos = Some(pos);
                    }
                }

                if input.pointer.button_released(PointerButton::Primary) || !input.pointer.primary_down() {
                    events.push(PointerEvent::Up);
                    self.pressed = false;
                    self.last_pointer_pos = None;
                }
            }
        });

        events
    }

    /// Forget an in-flight press without emitting anything.
    pub fn reset(&mut self) {
        self.pressed = false;
        self.last_pointer_pos = None;
    }
}
