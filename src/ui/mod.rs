//! User interface module.
//!
//! Provides the tab strip widget.

pub mod tab_strip;

pub use tab_strip::{SEPARATOR, TabStrip, TabStripError};
