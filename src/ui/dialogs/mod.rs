//! Modal dialogs for the TUI

pub mod help;

pub use help::HelpOverlay;
