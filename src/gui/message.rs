use std::path::PathBuf;

use crate::Operation;

#[derive(Debug, Clone)]
pub enum Message {
    LoadImage,
    ImageSelected(Option<PathBuf>),
    SaveImage,
    SaveTargetSelected(Option<PathBuf>),
    Reset,
    Edit(Operation),
    BrightnessChanged(i32),
    ContrastChanged(f32),
    BlurChanged(i32),
    ScaleChanged(f32),
}
