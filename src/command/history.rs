use log::debug;

use super::Command;
use crate::scene::{Scene, ShapeId, Snapshot};

/// Depth used when no explicit limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Manages undo/redo as two stacks of full scene snapshots
#[derive(Debug)]
pub struct CommandHistory {
    /// Scenes to go back to, most recent last
    undo_stack: Vec<Snapshot>,
    /// Scenes undone, most recent last
    redo_stack: Vec<Snapshot>,
    /// Maximum undo depth; `None` keeps everything
    limit: Option<usize>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(Some(DEFAULT_HISTORY_LIMIT))
    }
}

impl CommandHistory {
    /// Creates a new empty history that keeps at most `limit` undo entries
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Snapshot the scene before it is mutated. Any redo lineage is dropped.
    pub fn record_before_mutation(&mut self, scene: &Scene) {
        self.record(scene.snapshot());
    }

    /// Push a snapshot taken earlier, e.g. at the start of a drag.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.push_undo(snapshot);
        self.redo_stack.clear();
    }

    /// Execute a command, snapshotting the scene first.
    ///
    /// Commands that would not change anything are skipped and leave the history untouched.
    pub fn execute(&mut self, command: Command, scene: &mut Scene) -> Option<ShapeId> {
        if !command.changes(scene) {
            debug!("Skipping {}: nothing to change", command.name());
            return None;
        }
        self.record_before_mutation(scene);
        command.execute(scene)
    }

    /// Undo the last mutation. Returns false when there is nothing to undo.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(scene.snapshot());
        scene.restore(previous);
        debug!("Undo: {} left, {} redoable", self.undo_stack.len(), self.redo_stack.len());
        true
    }

    /// Redo the last undone mutation. Returns false when there is nothing to redo.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.push_undo(scene.snapshot());
        scene.restore(next);
        debug!("Redo: {} undoable, {} left", self.undo_stack.len(), self.redo_stack.len());
        true
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Returns true if there are mutations that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are mutations that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Clear the history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
