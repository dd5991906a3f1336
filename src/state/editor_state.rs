//! The gesture state machine for the drawing editor.
//!
//! Resting states are `Idle` (no tool armed, pointer presses can only pick up
//! and move shapes) and `ToolArmed`. A press moves into one of the `Dragging`
//! modes; a Text tool double-click parks the machine in `TextPending` until the
//! host delivers the prompt result.
//!
//! ```text
//!                 press on shape        ┌──────────────────────┐
//!           ┌──────────────────────────►│ Dragging(Move)       ├──┐
//!           │                           └──────────────────────┘  │
//! ┌─────────┴────────┐  press (drag tool) ┌────────────────────┐  │ release
//! │ Idle / ToolArmed ├───────────────────►│ Dragging(Preview)  ├──┤
//! │                  │                    └────────────────────┘  │
//! │                  │  press (polygon)   ┌────────────────────┐  │
//! │                  ├───────────────────►│ Dragging(Polygon)  ├──┤ double-click
//! │                  │                    └────────────────────┘  │
//! │                  │  double-click      ┌────────────────────┐  │
//! │                  ├───────────────────►│ TextPending        ├──┤ prompt result
//! └─────────▲────────┘  (text)            └────────────────────┘  │
//!           └─────────────────────────────────────────────────────┘
//! ```

use egui::{Pos2, Vec2};

use crate::scene::{ShapeId, Snapshot};
use crate::tools::ToolKind;

/// What an active drag is doing
#[derive(Debug, Clone, PartialEq)]
pub enum DragMode {
    /// Sizing a new shape from the press point
    PreviewShape { tool: ToolKind, anchor: Pos2 },
    /// Moving the selected shape
    MoveSelection {
        id: ShapeId,
        /// Pointer position at the previous event; each move is relative to it
        last: Pos2,
        /// Accumulated translation since the press
        total: Vec2,
        /// Scene as it was at the press, recorded for undo when the drag ends
        before: Snapshot,
    },
    /// Collecting polygon vertices, one per press, until a double-click
    PolygonBuilding,
}

/// The possible states of the editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    /// No tool armed
    Idle,
    /// A tool is armed and no gesture is in progress
    ToolArmed(ToolKind),
    /// A gesture is in progress
    Dragging(DragMode),
    /// Waiting for the host's text prompt to answer
    TextPending { at: Pos2 },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            // From a resting state, we can go to any state
            (EditorState::Idle | EditorState::ToolArmed(_), _) => true,

            // Every gesture ends in a resting state
            (_, EditorState::Idle | EditorState::ToolArmed(_)) => true,

            // Each press while building a polygon stays in the same mode
            (
                EditorState::Dragging(DragMode::PolygonBuilding),
                EditorState::Dragging(DragMode::PolygonBuilding),
            ) => true,

            _ => false,
        }
    }

    /// Returns true if no tool is armed and nothing is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true if a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging(_))
    }

    pub fn is_text_pending(&self) -> bool {
        matches!(self, EditorState::TextPending { .. })
    }

    /// The shape being moved, if any
    pub fn moving_shape(&self) -> Option<ShapeId> {
        match self {
            EditorState::Dragging(DragMode::MoveSelection { id, .. }) => Some(*id),
            _ => None,
        }
    }

    /// Short label for status displays
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::ToolArmed(_) => "Ready",
            EditorState::Dragging(DragMode::PreviewShape { .. }) => "Drawing",
            EditorState::Dragging(DragMode::MoveSelection { .. }) => "Moving",
            EditorState::Dragging(DragMode::PolygonBuilding) => "Building polygon",
            EditorState::TextPending { .. } => "Waiting for text",
        }
    }
}
