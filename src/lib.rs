#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod tools;
pub mod util;

pub use app::NotesApp;
pub use document::Document;
pub use element::{Element, ElementType};
pub use error::{EngineError, EngineResult};
pub use history::{CheckpointReason, History, HistoryEntry};
pub use id_generator::ElementId;
pub use input::{PointerEvent, Viewport};
pub use renderer::Renderer;
pub use scene::Scene;
pub use state::{EditorConfig, EditorContext, GestureOutcome, InteractionState};
pub use tools::Tool;
