//! triangles: Classify a triangle from three side lengths and draw it.

pub mod classify;
pub mod logging;
pub mod project;
pub mod report;
pub mod sanitize;
pub mod tui;
pub mod types;
