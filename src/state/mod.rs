mod config;
pub mod context;
mod controller;
mod editor_state;
mod persistence;

pub use config::EditorConfig;
pub use context::EditorContext;
pub use controller::{GestureOutcome, InteractionController};
pub use editor_state::InteractionState;
pub use persistence::{SESSION_KEY, load_session, save_session, session_from_json, session_to_json};
