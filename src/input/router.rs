use crate::state::{EditorContext, GestureOutcome};

use super::PointerEvent;

/// Routes a pointer event to the editor context.
///
/// Only `Up` can finish a gesture, so only `Up` yields a meaningful outcome.
pub fn route_event(context: &mut EditorContext, event: PointerEvent) -> GestureOutcome {
    match event {
        PointerEvent::Down(pos) => {
            context.handle_pointer_down(pos.x, pos.y);
            GestureOutcome::Ignored
        }
        PointerEvent::Move(pos) => {
            context.handle_pointer_move(pos.x, pos.y);
            GestureOutcome::Ignored
        }
        PointerEvent::Up => context.handle_pointer_up(),
    }
}
