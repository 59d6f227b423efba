use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::editor::ImageProcessor;
use crate::error::{Error, Result};
use crate::operation::Operation;

/// Debug configuration for script execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

impl DebugConfig {
    fn save(&self, processor: &ImageProcessor, file_name: &str) -> Result<()> {
        let path = self.output_dir.join(file_name);
        processor.save_image(&path)?;
        debug!("Debug: saved {}", file_name);
        Ok(())
    }
}

/// File name for the buffer after step `index` (1-based), e.g. "02_gaussian_blur.png"
pub fn step_file_name(index: usize, operation: &Operation) -> String {
    format!(
        "{:02}_{}.png",
        index,
        operation.name().to_lowercase().replace(' ', "_")
    )
}

/// Ordered edits applied to one loaded image
#[derive(Debug, Clone, Default)]
pub struct EditScript {
    operations: Vec<Operation>,
    debug: Option<DebugConfig>,
}

impl EditScript {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self {
            operations,
            debug: None,
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Add an operation at the end of the script
    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(Error::invalid(
                    "debug_out",
                    output_dir.display(),
                    "debug directory is not empty",
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Apply every operation in order, stopping at the first failure
    pub fn run(&self, processor: &mut ImageProcessor) -> Result<()> {
        if let Some(debug) = &self.debug {
            debug.save(processor, "00_input.png")?;
        }

        for (idx, operation) in self.operations.iter().enumerate() {
            info!("Running step {}: {}", idx + 1, operation);
            operation.apply(processor)?;

            if let Some(debug) = &self.debug {
                debug.save(processor, &step_file_name(idx + 1, operation))?;
            }
        }

        Ok(())
    }
}
