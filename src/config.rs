use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ops;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    Linear,
    Cubic,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Linear => FilterType::Triangle,
            ResizeFilter::Cubic => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Slider ranges and start values for the desktop front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub brightness_min: i32,
    pub brightness_max: i32,
    pub brightness_default: i32,
    pub contrast_min: f32,
    pub contrast_max: f32,
    pub contrast_step: f32,
    pub contrast_default: f32,
    pub blur_max: i32,
    pub blur_default: i32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub scale_default: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            brightness_min: -100,
            brightness_max: 100,
            brightness_default: 0,
            contrast_min: 0.5,
            contrast_max: 2.0,
            contrast_step: 0.1,
            contrast_default: 1.0,
            blur_max: 31,
            blur_default: 5,
            scale_min: 0.1,
            scale_max: 2.0,
            scale_default: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canny_low: f32,
    pub canny_high: f32,
    pub resize_filter: ResizeFilter,
    pub sliders: SliderConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canny_low: 100.0,
            canny_high: 200.0,
            resize_filter: ResizeFilter::Linear,
            sliders: SliderConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Read a JSON config file; absent fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let config: EditorConfig =
            serde_json::from_str(&json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.canny_low >= 0.0 && self.canny_low <= self.canny_high) {
            return Err(Error::Config(format!(
                "canny thresholds must satisfy 0 <= low <= high, got {}..{}",
                self.canny_low, self.canny_high
            )));
        }

        let s = &self.sliders;
        let ordered = s.brightness_min <= s.brightness_default
            && s.brightness_default <= s.brightness_max
            && s.contrast_min <= s.contrast_default
            && s.contrast_default <= s.contrast_max
            && 1 <= s.blur_default
            && s.blur_default <= s.blur_max
            && s.blur_max <= ops::MAX_BLUR_KERNEL as i32
            && 0.0 < s.scale_min
            && s.scale_min <= s.scale_default
            && s.scale_default <= s.scale_max;
        if !ordered || s.contrast_step <= 0.0 {
            return Err(Error::Config(
                "slider ranges must be ordered as min <= default <= max".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_classic_canny_thresholds() {
        let config = EditorConfig::default();
        assert_eq!(config.canny_low, 100.0);
        assert_eq!(config.canny_high, 200.0);
        assert_eq!(config.resize_filter, ResizeFilter::Linear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "canny_low": 50.0, "resize_filter": "nearest" }}"#)?;

        let config = EditorConfig::load(file.path())?;
        assert_eq!(config.canny_low, 50.0);
        assert_eq!(config.canny_high, 200.0);
        assert_eq!(config.resize_filter, ResizeFilter::Nearest);
        assert_eq!(config.sliders, SliderConfig::default());
        Ok(())
    }

    #[test]
    fn inverted_thresholds_are_rejected() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "canny_low": 300.0, "canny_high": 200.0 }}"#)?;

        let err = EditorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn blur_slider_cannot_exceed_kernel_limit() {
        let mut config = EditorConfig::default();
        config.sliders.blur_max = 301;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EditorConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
