//! The image processor: one original buffer, one processed buffer, and the
//! operations that replace the processed buffer.
//!
//! Each operation validates its scalar, makes a single call into [`crate::ops`]
//! and swaps the result in. Operations fail with [`Error::NotLoaded`] until an
//! image has been loaded.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::ops::{self, FlipDirection, Rotation};

#[derive(Debug, Clone, Default)]
pub struct ImageProcessor {
    original: Option<DynamicImage>,
    processed: Option<DynamicImage>,
    config: EditorConfig,
}

impl ImageProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.processed.is_some()
    }

    /// Load image from file. On failure the current buffers are kept.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let load_error = |source| Error::Load {
            path: path.to_path_buf(),
            source,
        };
        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| load_error(image::ImageError::IoError(e)))?
            .decode()
            .map_err(load_error)?;

        self.set_image(decoded);
        info!(path = %path.display(), "loaded image");
        Ok(())
    }

    /// Start editing an in-memory image, as if it had been loaded from disk
    pub fn set_image(&mut self, img: DynamicImage) {
        let img = ops::normalize(img);
        debug!(
            width = img.width(),
            height = img.height(),
            channels = img.color().channel_count(),
            "new original buffer"
        );
        self.processed = Some(img.clone());
        self.original = Some(img);
    }

    /// The processed image
    pub fn get_image(&self) -> Result<&DynamicImage> {
        self.processed.as_ref().ok_or(Error::NotLoaded)
    }

    /// The image as it was loaded
    pub fn original(&self) -> Result<&DynamicImage> {
        self.original.as_ref().ok_or(Error::NotLoaded)
    }

    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let img = self.get_image()?;
        Ok((img.width(), img.height()))
    }

    /// Write the processed image; the format follows the file extension
    pub fn save_image(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.get_image()?.save(path).map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved image");
        Ok(())
    }

    /// Discard every edit and go back to the loaded image
    pub fn reset(&mut self) -> Result<()> {
        let original = self.original()?.clone();
        self.processed = Some(original);
        debug!("reset to original");
        Ok(())
    }

    pub fn convert_grayscale(&mut self) -> Result<()> {
        self.replace("grayscale", ops::to_grayscale)
    }

    /// Gaussian blur. Intensities below 1 clamp to 1, even ones are bumped to
    /// the next odd kernel size. Kernels above [`ops::MAX_BLUR_KERNEL`] are
    /// rejected.
    pub fn apply_blur(&mut self, intensity: i32) -> Result<()> {
        self.get_image()?;
        let size = ops::kernel_size(intensity);
        if size > ops::MAX_BLUR_KERNEL {
            return Err(Error::invalid(
                "intensity",
                intensity,
                "blur kernel must be at most 255",
            ));
        }
        if i64::from(size) != i64::from(intensity) {
            debug!(intensity, kernel = size, "coerced blur intensity");
        }
        self.replace("blur", |img| ops::gaussian_blur(img, size))
    }

    pub fn edge_detection(&mut self) -> Result<()> {
        let (low, high) = (self.config.canny_low, self.config.canny_high);
        self.replace("edges", |img| ops::detect_edges(img, low, high))
    }

    /// Add `value` to every sample (alpha 1, beta `value`)
    pub fn adjust_brightness(&mut self, value: f64) -> Result<()> {
        self.get_image()?;
        if !value.is_finite() {
            return Err(Error::invalid("brightness", value, "brightness must be finite"));
        }
        self.replace("brightness", |img| ops::scale_abs(img, 1.0, value))
    }

    /// Multiply every sample by `value` (alpha `value`, beta 0)
    pub fn adjust_contrast(&mut self, value: f64) -> Result<()> {
        self.get_image()?;
        if !value.is_finite() {
            return Err(Error::invalid("contrast", value, "contrast must be finite"));
        }
        self.replace("contrast", |img| ops::scale_abs(img, value, 0.0))
    }

    /// Rotate clockwise by 90, 180 or 270 degrees
    pub fn rotate_image(&mut self, angle: i32) -> Result<()> {
        self.get_image()?;
        let rotation = Rotation::try_from(angle)?;
        self.replace("rotate", |img| ops::rotate(img, rotation))
    }

    /// Flip "horizontal" (mirror left-right) or "vertical" (upside down)
    pub fn flip_image(&mut self, direction: &str) -> Result<()> {
        self.get_image()?;
        let direction: FlipDirection = direction.parse()?;
        self.replace("flip", |img| ops::flip(img, direction))
    }

    /// Resize both axes by `scale`
    pub fn resize_image(&mut self, scale: f64) -> Result<()> {
        let (width, height) = self.dimensions()?;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::invalid("scale", scale, "scale must be positive"));
        }
        let (new_width, new_height) = ops::scaled_dimensions(width, height, scale);
        if new_width == 0 || new_height == 0 {
            return Err(Error::invalid(
                "scale",
                scale,
                "resulting dimensions must be greater than zero",
            ));
        }
        if !ops::within_pixel_budget(new_width, new_height) {
            return Err(Error::invalid("scale", scale, "resulting image too large"));
        }
        let filter = FilterType::from(self.config.resize_filter);
        self.replace("resize", |img| ops::resize(img, new_width, new_height, filter))
    }

    fn replace<F>(&mut self, operation: &str, f: F) -> Result<()>
    where
        F: FnOnce(&DynamicImage) -> DynamicImage,
    {
        let current = self.processed.as_ref().ok_or(Error::NotLoaded)?;
        let next = f(current);
        debug!(
            operation,
            width = next.width(),
            height = next.height(),
            channels = next.color().channel_count(),
            "applied"
        );
        self.processed = Some(next);
        Ok(())
    }
}
