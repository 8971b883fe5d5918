pub mod app;
pub mod charts;
pub mod dialogs;
pub mod input;
pub mod views;
pub mod widgets;

pub use app::App;
pub use input::{InputMode, InputState, Page};
