use egui::{Pos2, Rect, Vec2, vec2};

use super::style::{FontSpec, Paint};
use super::{Element, ShapeKind};
use crate::element::common;

/// A run of text centred on its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    anchor: Pos2,
    content: String,
    color: Paint,
    font: FontSpec,
}

impl Text {
    pub fn new(anchor: Pos2, content: impl Into<String>, color: Paint, font: FontSpec) -> Self {
        Self {
            anchor,
            content: content.into(),
            color,
            font,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color(&self) -> Paint {
        self.color
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }
}

impl Element for Text {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    /// Approximate extent; the exact size depends on the renderer's font metrics.
    fn rect(&self) -> Rect {
        let size = self.font.size() as f32;
        let chars = self.content.chars().count().max(1) as f32;
        let extent = vec2(
            chars * size * common::TEXT_CHAR_WIDTH_RATIO,
            size * common::TEXT_LINE_HEIGHT_RATIO,
        );
        Rect::from_center_size(self.anchor, extent)
    }

    fn hit_test(&self, pos: Pos2, slop: f32) -> bool {
        self.rect().expand(slop).contains(pos)
    }

    fn translate(&mut self, delta: Vec2) {
        self.anchor += delta;
    }

    fn coords(&self) -> Vec<f32> {
        vec![self.anchor.x, self.anchor.y]
    }
}
