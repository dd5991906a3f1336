use egui::{Pos2, Rect, Vec2};

use super::style::Paint;
use super::{Element, ShapeKind};
use crate::element::common;

/// Geometry shared by rectangles and ovals: two corner points, kept exactly as drawn.
///
/// The corners are not normalized; use [`Element::rect`] for axis-aligned bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    corners: [Pos2; 2],
    outline: Paint,
    fill: Paint,
    width: u32,
}

impl BoxShape {
    pub fn new(a: Pos2, b: Pos2, outline: Paint, fill: Paint, width: u32) -> Self {
        Self {
            corners: [a, b],
            outline,
            fill,
            width: width.max(1),
        }
    }

    pub fn corners(&self) -> [Pos2; 2] {
        self.corners
    }

    pub fn outline(&self) -> Paint {
        self.outline
    }

    pub fn fill(&self) -> Paint {
        self.fill
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn tolerance(&self, slop: f32) -> f32 {
        self.width as f32 / 2.0 + slop
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle(pub BoxShape);

/// Ellipse inscribed in its bounding box. Circles are ovals with a square box.
#[derive(Debug, Clone, PartialEq)]
pub struct Oval(pub BoxShape);

impl Element for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn rect(&self) -> Rect {
        let [a, b] = self.0.corners;
        common::normalized(a, b)
    }

    fn hit_test(&self, pos: Pos2, slop: f32) -> bool {
        common::hit_box(pos, self.rect(), self.0.tolerance(slop), !self.0.fill.is_none())
    }

    fn translate(&mut self, delta: Vec2) {
        for corner in &mut self.0.corners {
            *corner += delta;
        }
    }

    fn coords(&self) -> Vec<f32> {
        common::flatten(&self.0.corners)
    }
}

impl Element for Oval {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Oval
    }

    fn rect(&self) -> Rect {
        let [a, b] = self.0.corners;
        common::normalized(a, b)
    }

    fn hit_test(&self, pos: Pos2, slop: f32) -> bool {
        common::hit_ellipse(pos, self.rect(), self.0.tolerance(slop), !self.0.fill.is_none())
    }

    fn translate(&mut self, delta: Vec2) {
        for corner in &mut self.0.corners {
            *corner += delta;
        }
    }

    fn coords(&self) -> Vec<f32> {
        common::flatten(&self.0.corners)
    }
}
