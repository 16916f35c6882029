#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod state;
pub mod stroke;
pub mod texture_manager;
pub mod theme;

pub use app::DrawerApp;
pub use canvas::Canvas;
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::LoadError;
pub use event::{EditorEvent, EventBus, EventHandler};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use state::{EditorState, PointerState};
pub use stroke::Pen;
