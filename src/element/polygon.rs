use egui::{Pos2, Rect, Vec2};

use super::style::Paint;
use super::{Element, ShapeKind};
use crate::element::common;

/// Minimum number of vertices for a polygon to be committed.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Closed polygon through an ordered list of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Pos2>,
    outline: Paint,
    fill: Paint,
    width: u32,
}

impl Polygon {
    pub fn new(vertices: Vec<Pos2>, outline: Paint, fill: Paint, width: u32) -> Self {
        Self {
            vertices,
            outline,
            fill,
            width: width.max(1),
        }
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
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
}

impl Element for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.vertices, self.width as f32 / 2.0)
    }

    fn hit_test(&self, pos: Pos2, slop: f32) -> bool {
        if self.vertices.len() < 2 {
            return false;
        }
        if !self.fill.is_none() && common::point_in_polygon(pos, &self.vertices) {
            return true;
        }
        common::distance_to_outline(pos, &self.vertices) <= self.width as f32 / 2.0 + slop
    }

    fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    fn coords(&self) -> Vec<f32> {
        common::flatten(&self.vertices)
    }
}
