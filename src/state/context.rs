//! The main context for the drawing editor.
//!
//! `EditorContext` owns the scene, the undo history and the gesture state, and
//! is the only thing the hosting shell talks to. The shell forwards pointer
//! events in canvas coordinates, calls the command entry points from menus and
//! shortcuts, and draws whatever [`EditorContext::render_list`] returns.
//!
//! Every entry point is total: input that makes no sense in the current state
//! is ignored. Event handlers return the [`Action`]s the shell should react to.
//!
//! # Example
//!
//! ```rust,no_run
//! use vector_paint::state::EditorContext;
//! use vector_paint::tools::ToolKind;
//! use egui::pos2;
//!
//! let mut editor = EditorContext::default();
//! editor.set_tool(ToolKind::Rectangle);
//! editor.on_pointer_down(pos2(10.0, 10.0));
//! editor.on_pointer_move(pos2(60.0, 40.0));
//! editor.on_pointer_up(pos2(60.0, 40.0));
//! assert_eq!(editor.scene().len(), 1);
//! ```

use std::borrow::Cow;
use std::path::Path;

use egui::{Pos2, Vec2};
use log::{debug, info, warn};

use super::editor_state::{DragMode, EditorState};
use super::persistence::{self, PersistenceResult};
use crate::command::{Command, CommandHistory};
use crate::config::EditorConfig;
use crate::element::{FontSpec, MIN_POLYGON_VERTICES, Paint, Shape, factory};
use crate::scene::{Scene, ShapeId, Snapshot};
use crate::tools::{ToolKind, ToolStyle};

/// Things the host should react to after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The render list changed
    RenderNeeded,
    /// The selection changed to the given shape, or was cleared
    SelectionChanged(Option<ShapeId>),
    /// A new shape was added to the scene
    ShapeCommitted(ShapeId),
    /// A shape was removed from the scene
    ShapeDeleted(ShapeId),
    /// Ask the user for a string; answer through [`EditorContext::on_text_prompt`]
    TextPromptRequested { at: Pos2 },
}

/// One entry of the render list.
#[derive(Debug, Clone)]
pub struct RenderItem<'a> {
    pub shape: Cow<'a, Shape>,
    pub is_selected: bool,
    /// Transient: drag previews and polygon vertex markers
    pub is_preview: bool,
}

#[derive(Debug)]
pub struct EditorContext {
    state: EditorState,
    tool: Option<ToolKind>,
    style: ToolStyle,
    scene: Scene,
    history: CommandHistory,
    config: EditorConfig,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        let tool = config.default_tool;
        Self {
            state: match tool {
                Some(tool) => EditorState::ToolArmed(tool),
                None => EditorState::Idle,
            },
            tool,
            style: config.tool_style(),
            scene: Scene::new(),
            history: CommandHistory::new(config.history_limit),
            config,
        }
    }

    // --- State transitions ---

    fn resting_state(&self) -> EditorState {
        match self.tool {
            Some(ToolKind::Polygon) if !self.scene.polygon_vertices().is_empty() => {
                EditorState::Dragging(DragMode::PolygonBuilding)
            }
            Some(tool) => EditorState::ToolArmed(tool),
            None => EditorState::Idle,
        }
    }

    fn transition_to(&mut self, new_state: EditorState) {
        if !self.state.can_transition_to(&new_state) {
            warn!("Unexpected transition from {} to {}", self.state.name(), new_state.name());
        }
        debug!("{} -> {}", self.state.name(), new_state.name());
        self.state = new_state;
    }

    fn rest(&mut self) {
        let next = self.resting_state();
        self.transition_to(next);
    }

    /// End whatever gesture is in progress so a command can run.
    ///
    /// A preview is dropped, a move that already happened is committed to the
    /// history and a pending text prompt is abandoned.
    fn interrupt_gesture(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        match std::mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Dragging(DragMode::PreviewShape { .. }) => {
                self.scene.set_preview(None);
                actions.push(Action::RenderNeeded);
            }
            EditorState::Dragging(DragMode::MoveSelection { total, before, .. }) => {
                self.commit_move(before, total);
            }
            EditorState::TextPending { .. } => debug!("Text prompt abandoned"),
            _ => {}
        }
        self.rest();
        actions
    }

    fn commit_move(&mut self, before: Snapshot, total: Vec2) {
        if total == Vec2::ZERO {
            return;
        }
        self.history.record(before);
        info!("Moved shape by ({}, {})", total.x, total.y);
    }

    fn deselect(&mut self) -> Option<Action> {
        self.scene.selected()?;
        self.scene.select(None);
        Some(Action::SelectionChanged(None))
    }

    fn commit(&mut self, shape: Shape) -> Vec<Action> {
        let mut actions = vec![Action::RenderNeeded];
        if let Some(id) = self.history.execute(Command::AddShape(shape), &mut self.scene) {
            actions.push(Action::ShapeCommitted(id));
        }
        actions
    }

    // --- Tool settings ---

    /// Arm a drawing tool. Switching away from the polygon tool abandons the polygon in progress.
    pub fn set_tool(&mut self, tool: ToolKind) -> Vec<Action> {
        self.arm(Some(tool))
    }

    /// Disarm the current tool; presses can then only select and move shapes.
    pub fn clear_tool(&mut self) -> Vec<Action> {
        self.arm(None)
    }

    fn arm(&mut self, tool: Option<ToolKind>) -> Vec<Action> {
        let mut actions = self.interrupt_gesture();
        if tool != Some(ToolKind::Polygon) && !self.scene.polygon_vertices().is_empty() {
            debug!("Discarding {} polygon vertices", self.scene.polygon_vertices().len());
            self.scene.clear_polygon();
            actions.push(Action::RenderNeeded);
        }
        self.tool = tool;
        self.rest();
        actions
    }

    pub fn set_stroke_color(&mut self, color: Paint) {
        self.style.stroke = color;
    }

    pub fn set_fill_color(&mut self, color: Paint) {
        self.style.fill = color;
    }

    /// Set the stroke width for new shapes; values below 1 are raised to 1.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.style.width = width.max(1);
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.style.font = font;
    }

    // --- Gesture events ---

    pub fn on_pointer_down(&mut self, pos: Pos2) -> Vec<Action> {
        if self.state.is_text_pending() {
            debug!("Ignoring pointer-down while the text prompt is open");
            return Vec::new();
        }
        // A press without a matching release ends the previous gesture first
        let mut actions = self.interrupt_gesture();
        let tool = self.tool;

        if !tool.is_some_and(ToolKind::ignores_hits) {
            if let Some(id) = self.scene.hit(pos, self.config.hit_slop) {
                let before = self.scene.snapshot();
                self.scene.select(Some(id));
                self.transition_to(EditorState::Dragging(DragMode::MoveSelection {
                    id,
                    last: pos,
                    total: Vec2::ZERO,
                    before,
                }));
                actions.extend([Action::SelectionChanged(Some(id)), Action::RenderNeeded]);
                return actions;
            }
        }

        if let Some(action) = self.deselect() {
            actions.extend([action, Action::RenderNeeded]);
        }

        match tool {
            Some(ToolKind::Polygon) => {
                self.scene.push_polygon_vertex(pos);
                self.transition_to(EditorState::Dragging(DragMode::PolygonBuilding));
                actions.push(Action::RenderNeeded);
            }
            Some(tool) if tool.is_drag_shape() => {
                self.transition_to(EditorState::Dragging(DragMode::PreviewShape { tool, anchor: pos }));
            }
            _ => {}
        }
        actions
    }

    /// Pointer moved with the button held.
    pub fn on_pointer_move(&mut self, pos: Pos2) -> Vec<Action> {
        match &mut self.state {
            EditorState::Dragging(DragMode::MoveSelection { id, last, total, .. }) => {
                let delta = pos - *last;
                if delta == Vec2::ZERO {
                    return Vec::new();
                }
                self.scene.move_shape(*id, delta);
                *last = pos;
                *total += delta;
                vec![Action::RenderNeeded]
            }
            EditorState::Dragging(DragMode::PreviewShape { tool, anchor }) => {
                let preview = tool.preview(*anchor, pos, &self.style);
                self.scene.set_preview(preview);
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_pointer_up(&mut self, pos: Pos2) -> Vec<Action> {
        match std::mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Dragging(DragMode::MoveSelection { total, before, .. }) => {
                // The shape stays selected after the drag
                self.commit_move(before, total);
                self.rest();
                vec![Action::RenderNeeded]
            }
            EditorState::Dragging(DragMode::PreviewShape { tool, anchor }) => {
                self.scene.set_preview(None);
                let actions = match tool.commit(anchor, pos, &self.style) {
                    Some(shape) => self.commit(shape),
                    None => {
                        debug!("Nothing to commit for {tool}");
                        vec![Action::RenderNeeded]
                    }
                };
                self.rest();
                actions
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    pub fn on_double_click(&mut self, pos: Pos2) -> Vec<Action> {
        match self.tool {
            Some(ToolKind::Polygon) => {
                let count = self.scene.polygon_vertices().len();
                if count < MIN_POLYGON_VERTICES {
                    debug!("Polygon needs {MIN_POLYGON_VERTICES} vertices, have {count}");
                    return Vec::new();
                }
                let vertices = self.scene.take_polygon_vertices();
                let shape = factory::create_polygon(
                    vertices,
                    self.style.stroke,
                    self.style.fill,
                    self.style.width,
                );
                let actions = self.commit(shape);
                self.rest();
                actions
            }
            Some(ToolKind::Text) => {
                let mut actions = self.interrupt_gesture();
                self.transition_to(EditorState::TextPending { at: pos });
                actions.push(Action::TextPromptRequested { at: pos });
                actions
            }
            _ => Vec::new(),
        }
    }

    /// Deliver the text prompt result; `None` means the user cancelled.
    pub fn on_text_prompt(&mut self, result: Option<String>) -> Vec<Action> {
        let EditorState::TextPending { at } = &self.state else {
            warn!("Text prompt answered while none was pending");
            return Vec::new();
        };
        let at = *at;
        self.rest();

        match result.filter(|text| !text.is_empty()) {
            Some(content) => {
                let shape = factory::create_text(at, content, self.style.stroke, self.style.font.clone());
                self.commit(shape)
            }
            None => {
                debug!("Text prompt cancelled");
                Vec::new()
            }
        }
    }

    // --- Commands ---

    pub fn undo(&mut self) -> Vec<Action> {
        let mut actions = self.interrupt_gesture();
        let had_selection = self.scene.selected().is_some();
        if self.history.undo(&mut self.scene) {
            if had_selection {
                actions.push(Action::SelectionChanged(None));
            }
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let mut actions = self.interrupt_gesture();
        let had_selection = self.scene.selected().is_some();
        if self.history.redo(&mut self.scene) {
            if had_selection {
                actions.push(Action::SelectionChanged(None));
            }
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Delete the selected shape. Without a selection nothing happens.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let mut actions = self.interrupt_gesture();
        let Some(id) = self.scene.selected() else {
            return actions;
        };
        self.history.execute(Command::DeleteShape(id), &mut self.scene);
        self.scene.select(None);
        actions.extend([
            Action::ShapeDeleted(id),
            Action::SelectionChanged(None),
            Action::RenderNeeded,
        ]);
        actions
    }

    /// Remove every shape and abandon the polygon in progress.
    pub fn clear_all(&mut self) -> Vec<Action> {
        let mut actions = self.interrupt_gesture();
        let had_selection = self.scene.selected().is_some();
        self.scene.clear_polygon();
        self.history.execute(Command::ClearAll, &mut self.scene);
        self.rest();
        if had_selection {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Write the drawing to `path`. The scene is not touched.
    pub fn save(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        let path = path.as_ref();
        persistence::save_to_path(path, self.scene.snapshot().shapes())?;
        info!("Saved {} shapes to {}", self.scene.len(), path.display());
        Ok(())
    }

    /// Replace the drawing with the contents of `path`.
    ///
    /// The file is read and parsed before anything changes, so a failed load
    /// leaves both the scene and the history as they were.
    pub fn load(&mut self, path: impl AsRef<Path>) -> PersistenceResult<Vec<Action>> {
        let path = path.as_ref();
        let shapes = persistence::load_from_path(path)?;
        info!("Loaded {} shapes from {}", shapes.len(), path.display());

        let mut actions = self.interrupt_gesture();
        self.scene.clear_polygon();
        self.history.execute(Command::ReplaceAll(shapes), &mut self.scene);
        self.rest();
        actions.extend([Action::SelectionChanged(None), Action::RenderNeeded]);
        Ok(actions)
    }

    // --- Queries ---

    /// Everything to draw, bottom to top: committed shapes, the drag preview,
    /// then markers for the polygon vertices placed so far.
    pub fn render_list(&self) -> Vec<RenderItem<'_>> {
        let selected = self.scene.selected();
        let mut items: Vec<RenderItem<'_>> = self
            .scene
            .iter()
            .map(|(id, shape)| RenderItem {
                shape: Cow::Borrowed(shape),
                is_selected: selected == Some(id),
                is_preview: false,
            })
            .collect();

        if let Some(preview) = self.scene.preview() {
            items.push(RenderItem {
                shape: Cow::Borrowed(preview),
                is_selected: false,
                is_preview: true,
            });
        }

        let radius = self.config.marker_radius;
        items.extend(self.scene.polygon_vertices().iter().map(|&vertex| RenderItem {
            shape: Cow::Owned(factory::create_circle(vertex, radius, Paint::None, self.style.stroke, 1)),
            is_selected: false,
            is_preview: true,
        }));

        items
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The armed tool, or `None` in selection-only mode
    pub fn tool(&self) -> Option<ToolKind> {
        self.tool
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.scene.selected()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The configuration with the current tool and style folded in, for persisting.
    pub fn current_config(&self) -> EditorConfig {
        EditorConfig {
            default_tool: self.tool,
            stroke_color: self.style.stroke,
            fill_color: self.style.fill,
            stroke_width: self.style.width,
            font: self.style.font.clone(),
            ..self.config.clone()
        }
    }
}
