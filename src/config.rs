use serde::{Deserialize, Serialize};

use crate::command::DEFAULT_HISTORY_LIMIT;
use crate::element::{DEFAULT_HIT_SLOP, FontSpec, Paint};
use crate::tools::{ToolKind, ToolStyle};

/// Editor settings. Persisted by the app between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Tool armed at startup; `None` starts in selection-only mode
    pub default_tool: Option<ToolKind>,
    pub stroke_color: Paint,
    pub fill_color: Paint,
    pub stroke_width: u32,
    pub font: FontSpec,
    /// Maximum undo depth; `None` is unbounded
    pub history_limit: Option<usize>,
    /// Extra pixels around a shape that still count as a hit
    pub hit_slop: f32,
    /// Radius of the markers shown for polygon vertices
    pub marker_radius: f32,
    /// How much wider the selected shape's stroke is drawn
    pub selection_extra_width: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let style = ToolStyle::default();
        Self {
            default_tool: Some(ToolKind::Line),
            stroke_color: style.stroke,
            fill_color: style.fill,
            stroke_width: style.width,
            font: style.font,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            hit_slop: DEFAULT_HIT_SLOP,
            marker_radius: 3.0,
            selection_extra_width: 2,
        }
    }
}

impl EditorConfig {
    /// The initial style for new shapes
    pub fn tool_style(&self) -> ToolStyle {
        ToolStyle {
            stroke: self.stroke_color,
            fill: self.fill_color,
            width: self.stroke_width.max(1),
            font: self.font.clone(),
        }
    }
}
