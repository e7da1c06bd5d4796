//! Custom widgets

mod help;
mod map;
mod status;

pub use help::HelpWidget;
pub use map::MapWidget;
pub use status::StatusWidget;
