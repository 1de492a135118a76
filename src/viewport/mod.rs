//! Responsive layout detection
//!
//! [`ViewportClassifier`] turns width observations into a single "narrow
//! layout" flag. [`TerminalHost`] and [`ResizeWatcher`] connect it to the
//! controlling terminal.

pub mod classifier;
pub mod terminal;

pub use classifier::{ViewportClassifier, ViewportHost, NARROW_BREAKPOINT};
pub use terminal::{Resize, ResizeWatcher, TerminalHost};
