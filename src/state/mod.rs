mod context;
mod editor_state;
pub mod persistence;

pub use context::{Action, EditorContext, RenderItem};
pub use editor_state::{DragMode, EditorState};
pub use persistence::{PersistenceError, PersistenceResult};
