//! The live drawing: an ordered list of shapes plus transient interaction state.
//!
//! Insertion order is paint order, so later shapes are drawn on top. Every shape
//! gets a [`ShapeId`] from the scene when it is added; handles are never reused
//! within one scene, and a [`Scene::restore`] issues fresh ones.

use std::fmt;

use egui::{Pos2, Vec2};

use crate::element::{Element, Shape};

/// Opaque handle for a shape instance, issued by the [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A deep, style-complete copy of the scene's shape list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    shapes: Vec<Shape>,
}

impl Snapshot {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[derive(Debug, Clone)]
struct SceneItem {
    id: ShapeId,
    shape: Shape,
}

#[derive(Debug, Default)]
pub struct Scene {
    items: Vec<SceneItem>,
    next_id: u64,
    selected: Option<ShapeId>,
    polygon_vertices: Vec<Pos2>,
    preview: Option<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_id(&mut self) -> ShapeId {
        self.next_id += 1;
        ShapeId(self.next_id)
    }

    /// Append a shape on top of the others and return its handle.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.issue_id();
        self.items.push(SceneItem { id, shape });
        id
    }

    /// Remove a shape. Unknown handles are ignored.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.items.iter().position(|item| item.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.items.remove(index).shape)
    }

    /// Translate a shape. Returns false when the handle is unknown.
    pub fn move_shape(&mut self, id: ShapeId, delta: Vec2) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.shape.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.shapes().cloned().collect())
    }

    /// Replace the whole shape list with the snapshot's contents.
    ///
    /// Every restored shape gets a new handle, so the selection is dropped.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let mut items = Vec::with_capacity(snapshot.len());
        for shape in snapshot.into_shapes() {
            let id = self.issue_id();
            items.push(SceneItem { id, shape });
        }
        self.items = items;
        self.selected = None;
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.items.iter().find(|item| item.id == id).map(|item| &item.shape)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Shapes in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.items.iter().map(|item| (item.id, &item.shape))
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.items.iter().map(|item| &item.shape)
    }

    pub fn ids(&self) -> Vec<ShapeId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The topmost shape under `pos`.
    pub fn hit(&self, pos: Pos2, slop: f32) -> Option<ShapeId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.shape.hit_test(pos, slop))
            .map(|item| item.id)
    }

    // --- Selection ---

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Select a shape, or clear the selection with `None`. Unknown handles clear it too.
    pub fn select(&mut self, id: Option<ShapeId>) {
        self.selected = id.filter(|id| self.contains(*id));
    }

    // --- Polygon under construction ---

    pub fn polygon_vertices(&self) -> &[Pos2] {
        &self.polygon_vertices
    }

    pub fn push_polygon_vertex(&mut self, pos: Pos2) {
        self.polygon_vertices.push(pos);
    }

    pub fn take_polygon_vertices(&mut self) -> Vec<Pos2> {
        std::mem::take(&mut self.polygon_vertices)
    }

    pub fn clear_polygon(&mut self) {
        self.polygon_vertices.clear();
    }

    // --- Preview ---

    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    pub fn set_preview(&mut self, shape: Option<Shape>) {
        self.preview = shape;
    }
}
