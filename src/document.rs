use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::scene::Scene;

/// The host's text content together with the annotation scene drawn over it.
///
/// The text is carried verbatim; nothing here parses or interprets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub scene: Scene,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scene: Scene::new(),
        }
    }

    pub fn with_scene(text: impl Into<String>, scene: Scene) -> Self {
        Self {
            text: text.into(),
            scene,
        }
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
