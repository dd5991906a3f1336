use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::element::{Element, Oval, Paint, Rectangle, Shape};
use crate::state::RenderItem;

/// Draws the editor's render list with an egui [`Painter`].
///
/// Shapes live in canvas coordinates; `origin` is where the canvas's (0, 0)
/// lands on screen.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Added to the stroke width of the selected shape
    selection_extra_width: u32,
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Renderer {
    pub fn new(selection_extra_width: u32) -> Self {
        Self {
            selection_extra_width,
            background: Color32::WHITE,
        }
    }

    pub fn set_selection_extra_width(&mut self, width: u32) {
        self.selection_extra_width = width;
    }

    /// Renders the current frame
    pub fn render(&self, painter: &Painter, canvas: Rect, items: &[RenderItem<'_>]) {
        painter.rect_filled(canvas, 0.0, self.background);

        let origin = canvas.min.to_vec2();
        for item in items {
            let extra = if item.is_selected { self.selection_extra_width } else { 0 };
            match item.shape.as_ref() {
                Shape::Text(text) => {
                    let Some(color) = text.color().color() else {
                        continue;
                    };
                    painter.text(
                        text.anchor() + origin,
                        Align2::CENTER_CENTER,
                        text.content(),
                        FontId::proportional(text.font().size() as f32),
                        color,
                    );
                    if item.is_selected {
                        painter.rect_stroke(
                            text.rect().translate(origin),
                            0.0,
                            Stroke::new(1.0, color),
                        );
                    }
                }
                shape => painter.extend(vector_shapes(shape, origin, extra)),
            }
        }
    }
}

fn stroke(paint: Paint, width: u32) -> Stroke {
    match paint.color() {
        Some(color) => Stroke::new(width as f32, color),
        None => Stroke::NONE,
    }
}

/// Paint commands for every shape kind except text, which needs font access.
pub fn vector_shapes(shape: &Shape, origin: Vec2, extra_width: u32) -> Vec<egui::Shape> {
    let offset = |points: &[Pos2]| points.iter().map(|p| *p + origin).collect::<Vec<_>>();

    match shape {
        Shape::Line(line) => {
            vec![egui::Shape::line(
                offset(line.points()),
                stroke(line.color(), line.width().saturating_add(extra_width)),
            )]
        }
        Shape::Rectangle(Rectangle(b)) => {
            let rect = shape.rect().translate(origin);
            let mut shapes = Vec::with_capacity(2);
            if let Some(fill) = b.fill().color() {
                shapes.push(egui::Shape::rect_filled(rect, 0.0, fill));
            }
            let outline = stroke(b.outline(), b.width().saturating_add(extra_width));
            if !outline.is_empty() {
                shapes.push(egui::Shape::rect_stroke(rect, 0.0, outline));
            }
            shapes
        }
        Shape::Oval(Oval(b)) => {
            let rect = shape.rect().translate(origin);
            let radius = rect.size() / 2.0;
            let mut shapes = Vec::with_capacity(2);
            if let Some(fill) = b.fill().color() {
                shapes.push(egui::Shape::ellipse_filled(rect.center(), radius, fill));
            }
            let outline = stroke(b.outline(), b.width().saturating_add(extra_width));
            if !outline.is_empty() {
                shapes.push(egui::Shape::ellipse_stroke(rect.center(), radius, outline));
            }
            shapes
        }
        Shape::Polygon(polygon) => {
            let points = offset(polygon.vertices());
            let mut shapes = Vec::with_capacity(2);
            // egui only fills convex paths correctly; concave polygons are approximated
            if let Some(fill) = polygon.fill().color() {
                shapes.push(egui::Shape::convex_polygon(points.clone(), fill, Stroke::NONE));
            }
            let outline = stroke(polygon.outline(), polygon.width().saturating_add(extra_width));
            if !outline.is_empty() {
                shapes.push(egui::Shape::closed_line(points, outline));
            }
            shapes
        }
        Shape::Text(_) => Vec::new(),
    }
}
