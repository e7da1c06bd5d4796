//! dg-tui: terminal viewer using ratatui
//!
//! Draws the generated dungeon and maps keys to regenerate and room-count
//! commands. Generation itself lives in dg-core.

pub mod app;
pub mod display;
pub mod dump;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use display::GraphicsMode;
pub use input::Command;
pub use theme::Theme;
