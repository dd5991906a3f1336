use std::fmt;
use std::str::FromStr;

use egui::{Pos2, Rect, Vec2};

mod boxed;
pub mod common;
mod line;
mod polygon;
pub mod style;
mod text;

pub use boxed::{BoxShape, Oval, Rectangle};
pub use common::DEFAULT_HIT_SLOP;
pub use line::Line;
pub use polygon::{MIN_POLYGON_VERTICES, Polygon};
pub use style::{FontSpec, Paint};
pub use text::Text;

/// Common trait that all drawable shapes implement
pub trait Element {
    /// The persisted kind of this shape
    fn kind(&self) -> ShapeKind;

    /// Normalized axis-aligned bounds
    fn rect(&self) -> Rect;

    /// Whether `pos` lies on the rendered extent, with `slop` pixels of tolerance
    fn hit_test(&self, pos: Pos2, slop: f32) -> bool;

    /// Translate every coordinate by `delta`
    fn translate(&mut self, delta: Vec2);

    /// Flat `x, y, x, y, ...` coordinate list
    fn coords(&self) -> Vec<f32>;
}

/// The five persisted shape kinds. Circles are stored as ovals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Oval,
    Polygon,
    Text,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Oval,
        ShapeKind::Polygon,
        ShapeKind::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Oval => "oval",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Text => "text",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_owned())
    }
}

/// A shape on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Oval(Oval),
    Polygon(Polygon),
    Text(Text),
}

impl Shape {
    /// Outline (or text) color and stroke width, as used for highlighting.
    pub fn stroke(&self) -> (Paint, Option<u32>) {
        match self {
            Shape::Line(l) => (l.color(), Some(l.width())),
            Shape::Rectangle(Rectangle(b)) | Shape::Oval(Oval(b)) => (b.outline(), Some(b.width())),
            Shape::Polygon(p) => (p.outline(), Some(p.width())),
            Shape::Text(t) => (t.color(), None),
        }
    }

    /// Interior paint; lines and text have none.
    pub fn fill(&self) -> Paint {
        match self {
            Shape::Rectangle(Rectangle(b)) | Shape::Oval(Oval(b)) => b.fill(),
            Shape::Polygon(p) => p.fill(),
            Shape::Line(_) | Shape::Text(_) => Paint::None,
        }
    }
}

impl Element for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(s) => s.kind(),
            Shape::Rectangle(s) => s.kind(),
            Shape::Oval(s) => s.kind(),
            Shape::Polygon(s) => s.kind(),
            Shape::Text(s) => s.kind(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            Shape::Line(s) => s.rect(),
            Shape::Rectangle(s) => s.rect(),
            Shape::Oval(s) => s.rect(),
            Shape::Polygon(s) => s.rect(),
            Shape::Text(s) => s.rect(),
        }
    }

    fn hit_test(&self, pos: Pos2, slop: f32) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(pos, slop),
            Shape::Rectangle(s) => s.hit_test(pos, slop),
            Shape::Oval(s) => s.hit_test(pos, slop),
            Shape::Polygon(s) => s.hit_test(pos, slop),
            Shape::Text(s) => s.hit_test(pos, slop),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line(s) => s.translate(delta),
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Oval(s) => s.translate(delta),
            Shape::Polygon(s) => s.translate(delta),
            Shape::Text(s) => s.translate(delta),
        }
    }

    fn coords(&self) -> Vec<f32> {
        match self {
            Shape::Line(s) => s.coords(),
            Shape::Rectangle(s) => s.coords(),
            Shape::Oval(s) => s.coords(),
            Shape::Polygon(s) => s.coords(),
            Shape::Text(s) => s.coords(),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    pub fn create_line(points: Vec<Pos2>, color: Paint, width: u32) -> Shape {
        Shape::Line(Line::new(points, color, width))
    }

    pub fn create_rectangle(a: Pos2, b: Pos2, outline: Paint, fill: Paint, width: u32) -> Shape {
        Shape::Rectangle(Rectangle(BoxShape::new(a, b, outline, fill, width)))
    }

    pub fn create_oval(a: Pos2, b: Pos2, outline: Paint, fill: Paint, width: u32) -> Shape {
        Shape::Oval(Oval(BoxShape::new(a, b, outline, fill, width)))
    }

    /// An oval whose box is derived from `center` and radius `r`.
    pub fn create_circle(center: Pos2, r: f32, outline: Paint, fill: Paint, width: u32) -> Shape {
        let (a, b) = common::circle_bounds(center, r);
        create_oval(a, b, outline, fill, width)
    }

    pub fn create_polygon(vertices: Vec<Pos2>, outline: Paint, fill: Paint, width: u32) -> Shape {
        Shape::Polygon(Polygon::new(vertices, outline, fill, width))
    }

    pub fn create_text(anchor: Pos2, content: impl Into<String>, color: Paint, font: FontSpec) -> Shape {
        Shape::Text(Text::new(anchor, content, color, font))
    }
}
