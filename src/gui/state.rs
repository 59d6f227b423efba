use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{EditorConfig, ImageProcessor, Operation};

/// Everything the editor window edits: the processor plus the slider values
#[derive(Debug)]
pub struct AppState {
    pub processor: ImageProcessor,
    pub brightness: i32,
    pub contrast: f32,
    pub blur: i32,
    pub scale: f32,
    pub current_file: Option<PathBuf>,
    /// Outcome of the last action, shown under the controls
    pub status: Option<String>,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        let sliders = &config.sliders;
        Self {
            brightness: sliders.brightness_default,
            contrast: sliders.contrast_default,
            blur: sliders.blur_default,
            scale: sliders.scale_default,
            processor: ImageProcessor::with_config(config),
            current_file: None,
            status: None,
        }
    }

    pub fn load(&mut self, path: &Path) -> bool {
        let result = self
            .processor
            .load_image(path)
            .and_then(|_| self.processor.dimensions());
        match result {
            Ok((width, height)) => {
                self.current_file = Some(path.to_path_buf());
                self.status = Some(format!("Loaded {} ({}x{})", path.display(), width, height));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn save(&mut self, path: &Path) -> bool {
        match self.processor.save_image(path) {
            Ok(()) => {
                self.status = Some(format!("Saved {}", path.display()));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn reset(&mut self) -> bool {
        match self.processor.reset() {
            Ok(()) => {
                self.status = Some("Reverted to the loaded image".to_string());
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Forward one edit to the processor; returns whether the buffer changed
    pub fn apply(&mut self, operation: &Operation) -> bool {
        match operation.apply(&mut self.processor) {
            Ok(()) => {
                self.status = Some(format!("Applied {}", operation));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: crate::Error) -> bool {
        warn!("{}", error);
        self.status = Some(format!("Error: {}", error));
        false
    }
}
