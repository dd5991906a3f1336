#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod element;
pub mod error;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use command::{Command, CommandHistory};
pub use config::EditorConfig;
pub use element::{Element, Shape, ShapeKind};
pub use renderer::Renderer;
pub use scene::{Scene, ShapeId, Snapshot};
pub use state::{Action, EditorContext, EditorState};
pub use tools::ToolKind;
