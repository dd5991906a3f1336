use egui::{Pos2, Rect, Vec2};

use super::style::Paint;
use super::{Element, ShapeKind};
use crate::element::common;

/// Polyline through an ordered list of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    points: Vec<Pos2>,
    color: Paint,
    width: u32,
}

impl Line {
    /// Create a new line. Widths below 1 are raised to 1.
    pub fn new(points: Vec<Pos2>, color: Paint, width: u32) -> Self {
        Self {
            points,
            color,
            width: width.max(1),
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Paint {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

impl Element for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, self.width as f32 / 2.0)
    }

    fn hit_test(&self, pos: Pos2, slop: f32) -> bool {
        let tolerance = self.width as f32 / 2.0 + slop;
        self.points
            .windows(2)
            .any(|w| common::distance_to_line_segment(pos, w[0], w[1]) <= tolerance)
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    fn coords(&self) -> Vec<f32> {
        common::flatten(&self.points)
    }
}
