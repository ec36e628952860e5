use log::info;

use super::EditorContext;
use crate::error::EngineResult;

/// Storage key for the editor session.
pub const SESSION_KEY: &str = eframe::APP_KEY;

/// Restore the previous session, or start a fresh one.
///
/// Gesture state, selection and drawing mode are never stored; a restored
/// session always starts idle in text mode.
pub fn load_session(storage: Option<&dyn eframe::Storage>) -> EditorContext {
    let Some(storage) = storage else {
        return EditorContext::default();
    };

    match eframe::get_value::<EditorContext>(storage, SESSION_KEY) {
        Some(mut context) => {
            context.sanitize();
            info!(
                "Restored session: {} elements, {} history entries",
                context.scene().len(),
                context.history().len()
            );
            context
        }
        None => {
            info!("No usable stored session; starting fresh");
            EditorContext::default()
        }
    }
}

pub fn save_session(storage: &mut dyn eframe::Storage, context: &EditorContext) {
    eframe::set_value(storage, SESSION_KEY, context);
}

/// Serialize the whole session (document, history and settings) as JSON.
pub fn session_to_json(context: &EditorContext) -> EngineResult<String> {
    Ok(serde_json::to_string(context)?)
}

pub fn session_from_json(json: &str) -> EngineResult<EditorContext> {
    let mut context: EditorContext = serde_json::from_str(json)?;
    context.sanitize();
    Ok(context)
}
