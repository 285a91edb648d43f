//! Small browser and formatting helpers shared by pages and components.

pub mod dom;
pub mod format;
pub mod timer;
