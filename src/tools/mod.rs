use serde::{Deserialize, Serialize};

/// The active drawing-mode tool, chosen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Pick, move and resize existing annotations.
    Select,
    /// Freehand stroke.
    #[default]
    Pen,
    Rectangle,
    Ellipse,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::Pen, Tool::Rectangle, Tool::Ellipse];

    /// Return the name of the tool
    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pen => "Pen",
            Tool::Rectangle => "Rectangle",
            Tool::Ellipse => "Ellipse",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Select => "🖱",
            Tool::Pen => "✏",
            Tool::Rectangle => "◻",
            Tool::Ellipse => "○",
        }
    }
}
