#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod fill;
pub mod grid;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod state;

pub use app::PaintApp;
pub use color::Color;
pub use command::Command;
pub use config::SessionConfig;
pub use error::{GridError, LoadError, PaletteError, SessionError};
pub use fill::flood_fill;
pub use grid::{Cell, CellChange, Grid};
pub use palette::Palette;
pub use renderer::Renderer;
pub use state::{FileStore, MemoryStore, PaintSession, Repaint, SessionState, Snapshot, SnapshotStore};
