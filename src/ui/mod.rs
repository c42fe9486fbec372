//! Restwise user interface

pub mod app;
pub mod components;
pub mod state;
pub mod theme;

pub use app::RestwiseApp;
pub use state::{AppState, DisplayState, PLACEHOLDER_GLYPH};
pub use theme::Theme;
