//! Building blocks shared by the three views.

pub mod clipboard;
pub mod format;
pub mod modal;
pub mod tile_grid;
pub mod toast;
