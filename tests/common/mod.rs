#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from imgedit for tests
pub use imgedit::{EditScript, EditorConfig, Error, ImageProcessor, Operation, ResizeFilter};
