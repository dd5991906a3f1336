use log::info;

use crate::element::{Element, Shape};
use crate::scene::{Scene, ShapeId, Snapshot};

/// Mutations of the scene that go through the undo history.
///
/// Moving a shape is not a command: the drag translates the shape live and the
/// history records the pre-drag snapshot when the drag ends.
#[derive(Debug, Clone)]
pub enum Command {
    /// Add a shape on top of the others
    AddShape(Shape),

    /// Remove one shape
    DeleteShape(ShapeId),

    /// Remove every shape
    ClearAll,

    /// Replace the whole drawing, as when a file is opened
    ReplaceAll(Vec<Shape>),
}

impl Command {
    /// Short human readable label
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddShape(_) => "Add Shape",
            Command::DeleteShape(_) => "Delete Shape",
            Command::ClearAll => "Clear All",
            Command::ReplaceAll(_) => "Open Drawing",
        }
    }

    /// Whether executing the command would change the scene at all
    pub fn changes(&self, scene: &Scene) -> bool {
        match self {
            Command::AddShape(_) | Command::ReplaceAll(_) => true,
            Command::DeleteShape(id) => scene.contains(*id),
            Command::ClearAll => !scene.is_empty(),
        }
    }

    /// Execute the command against the scene.
    ///
    /// Returns the handle of the shape it created, if any.
    pub fn execute(self, scene: &mut Scene) -> Option<ShapeId> {
        match self {
            Command::AddShape(shape) => {
                let kind = shape.kind();
                let id = scene.add_shape(shape);
                info!("Added {kind} {id}");
                Some(id)
            }

            Command::DeleteShape(id) => {
                if scene.remove_shape(id).is_some() {
                    info!("Deleted shape {id}");
                }
                None
            }

            Command::ClearAll => {
                info!("Cleared {} shapes", scene.len());
                scene.clear();
                None
            }

            Command::ReplaceAll(shapes) => {
                info!("Replaced drawing with {} shapes", shapes.len());
                scene.restore(Snapshot::new(shapes));
                None
            }
        }
    }
}
