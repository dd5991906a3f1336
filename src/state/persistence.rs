use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::{
    Element, FontSpec, MIN_POLYGON_VERTICES, Oval, Paint, Rectangle, Shape, ShapeKind, common,
    factory,
};
use crate::error::{ParseColorError, ParseFontError};

/// Errors that can occur while saving or loading a drawing
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed drawing file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown shape type `{0}`")]
    UnknownKind(String),

    #[error("Invalid shape record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    #[error(transparent)]
    InvalidFont(#[from] ParseFontError),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// One shape as it appears in a drawing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Flat `x, y, x, y, ...`
    #[serde(default)]
    pub coords: Vec<f32>,
    #[serde(default)]
    pub options: ShapeOptions,
}

/// Style map of a record. Which keys are present depends on the shape type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeOptions {
    /// Interior color; the stroke color for lines and the text color for text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        let options = match shape {
            Shape::Line(line) => ShapeOptions {
                fill: Some(line.color().to_string()),
                width: Some(line.width()),
                ..Default::default()
            },
            Shape::Rectangle(Rectangle(b)) | Shape::Oval(Oval(b)) => ShapeOptions {
                fill: Some(b.fill().to_string()),
                width: Some(b.width()),
                outline: Some(b.outline().to_string()),
                ..Default::default()
            },
            Shape::Polygon(polygon) => ShapeOptions {
                fill: Some(polygon.fill().to_string()),
                width: Some(polygon.width()),
                outline: Some(polygon.outline().to_string()),
                ..Default::default()
            },
            Shape::Text(text) => ShapeOptions {
                fill: Some(text.color().to_string()),
                text: Some(text.content().to_owned()),
                font: Some(text.font().to_string()),
                ..Default::default()
            },
        };

        Self {
            kind: shape.kind().to_string(),
            coords: shape.coords(),
            options,
        }
    }
}

impl ShapeRecord {
    /// Rebuild the shape this record describes. `index` is only used in errors.
    ///
    /// Missing colors and widths fall back to what a fresh canvas item would
    /// get: black strokes, no fill, width 1. Text records must carry `text`.
    pub fn into_shape(self, index: usize) -> PersistenceResult<Shape> {
        let invalid = |reason: String| PersistenceError::InvalidRecord { index, reason };

        let kind: ShapeKind = self.kind.parse().map_err(PersistenceError::UnknownKind)?;
        let points = common::unflatten(&self.coords)
            .ok_or_else(|| invalid(format!("odd number of coordinates ({})", self.coords.len())))?;

        let expect_points = |ok: bool, wanted: &str| {
            if ok {
                Ok(())
            } else {
                Err(invalid(format!("{kind} needs {wanted} points, got {}", points.len())))
            }
        };

        let options = self.options;
        let width = options.width.unwrap_or(1);
        let fill = parse_paint(options.fill.as_deref(), Paint::None)?;
        let outline = parse_paint(options.outline.as_deref(), Paint::BLACK)?;

        let shape = match kind {
            ShapeKind::Line => {
                expect_points(points.len() >= 2, "at least 2")?;
                let color = parse_paint(options.fill.as_deref(), Paint::BLACK)?;
                factory::create_line(points, color, width)
            }
            ShapeKind::Rectangle => {
                expect_points(points.len() == 2, "exactly 2")?;
                factory::create_rectangle(points[0], points[1], outline, fill, width)
            }
            ShapeKind::Oval => {
                expect_points(points.len() == 2, "exactly 2")?;
                factory::create_oval(points[0], points[1], outline, fill, width)
            }
            ShapeKind::Polygon => {
                expect_points(
                    points.len() >= MIN_POLYGON_VERTICES,
                    &format!("at least {MIN_POLYGON_VERTICES}"),
                )?;
                factory::create_polygon(points, outline, fill, width)
            }
            ShapeKind::Text => {
                expect_points(points.len() == 1, "exactly 1")?;
                let content = options.text.ok_or_else(|| invalid("text without `text` option".to_owned()))?;
                let color = parse_paint(options.fill.as_deref(), Paint::BLACK)?;
                let font = match options.font.as_deref() {
                    Some(font) => font.parse::<FontSpec>()?,
                    None => FontSpec::default(),
                };
                factory::create_text(points[0], content, color, font)
            }
        };
        Ok(shape)
    }
}

fn parse_paint(value: Option<&str>, default: Paint) -> PersistenceResult<Paint> {
    match value {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WidthRepr {
    Number(f64),
    Text(String),
}

/// Widths are written as integers but older files carry strings like `"2"` or `"2.0"`.
fn deserialize_width<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(repr) = Option::<WidthRepr>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value = match repr {
        WidthRepr::Number(n) => n,
        WidthRepr::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid width `{s}`")))?,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(de::Error::custom(format!("invalid width `{value}`")));
    }
    Ok(Some((value.round() as u32).max(1)))
}

/// Serialize shapes, bottom to top, into the drawing file format.
pub fn serialize(shapes: &[Shape]) -> PersistenceResult<String> {
    let records: Vec<ShapeRecord> = shapes.iter().map(ShapeRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse a drawing file. Fails on the first bad record; nothing is partially loaded.
pub fn deserialize(json: &str) -> PersistenceResult<Vec<Shape>> {
    let records: Vec<ShapeRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_shape(index))
        .collect()
}

pub fn save_to_path(path: &Path, shapes: &[Shape]) -> PersistenceResult<()> {
    let json = serialize(shapes)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_from_path(path: &Path) -> PersistenceResult<Vec<Shape>> {
    let json = fs::read_to_string(path)?;
    deserialize(&json)
}
