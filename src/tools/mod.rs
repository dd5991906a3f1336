use std::fmt;

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::element::{FontSpec, Paint, Shape, common, factory};

/// Enum representing all available drawing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Line,
    Rectangle,
    Oval,
    Circle,
    Polygon,
    Text,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Oval,
        ToolKind::Circle,
        ToolKind::Polygon,
        ToolKind::Text,
    ];

    /// Return the name of the tool
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Oval => "Oval",
            ToolKind::Circle => "Circle",
            ToolKind::Polygon => "Polygon",
            ToolKind::Text => "Text",
        }
    }

    /// Tools that create their shape with a press-drag-release gesture
    pub fn is_drag_shape(self) -> bool {
        matches!(self, ToolKind::Line | ToolKind::Rectangle | ToolKind::Oval | ToolKind::Circle)
    }

    /// Tools whose pointer-down never picks up an existing shape
    pub fn ignores_hits(self) -> bool {
        matches!(self, ToolKind::Polygon | ToolKind::Text)
    }

    /// Transient shape shown while dragging from `anchor` to `current`.
    pub fn preview(self, anchor: Pos2, current: Pos2, style: &ToolStyle) -> Option<Shape> {
        match self {
            ToolKind::Line => Some(factory::create_line(
                vec![anchor, current],
                style.stroke,
                style.width,
            )),
            _ => self.commit(anchor, current, style),
        }
    }

    /// Final shape for a drag released at `release`.
    ///
    /// Lines are resampled into unit steps; rectangles and ovals keep the two
    /// corners as drawn; circles become ovals around `anchor` and are skipped
    /// when the radius is zero.
    pub fn commit(self, anchor: Pos2, release: Pos2, style: &ToolStyle) -> Option<Shape> {
        match self {
            ToolKind::Line => {
                let points = common::resample_line(anchor, release);
                (points.len() >= 2).then(|| factory::create_line(points, style.stroke, style.width))
            }
            ToolKind::Rectangle => Some(factory::create_rectangle(
                anchor,
                release,
                style.stroke,
                style.fill,
                style.width,
            )),
            ToolKind::Oval => Some(factory::create_oval(
                anchor,
                release,
                style.stroke,
                style.fill,
                style.width,
            )),
            ToolKind::Circle => {
                let r = common::radius(anchor, release);
                (r > 0.0).then(|| factory::create_circle(anchor, r, style.stroke, style.fill, style.width))
            }
            ToolKind::Polygon | ToolKind::Text => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Style applied to newly created shapes
#[derive(Debug, Clone, PartialEq)]
pub struct ToolStyle {
    /// Outline color, also used for lines and text
    pub stroke: Paint,
    /// Interior color for rectangles, ovals and polygons
    pub fill: Paint,
    /// Stroke width, at least 1
    pub width: u32,
    pub font: FontSpec,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            stroke: Paint::BLACK,
            fill: Paint::None,
            width: 2,
            font: FontSpec::default(),
        }
    }
}
