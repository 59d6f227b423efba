use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Pixel, Rgb};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::map::map_colors;

use crate::error::Error;

/// Bring a decoded image into one of the two buffer layouts (`Luma8` or `Rgb8`)
pub fn normalize(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
        other if other.color().channel_count() == 1 => DynamicImage::ImageLuma8(other.to_luma8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Largest Gaussian kernel the blur operation accepts
pub const MAX_BLUR_KERNEL: u32 = 255;

/// Largest image, in pixels, a resize may produce (8192 x 8192)
pub const MAX_PIXELS: u64 = 1 << 26;

/// Convert image to single-channel grayscale
pub fn to_grayscale(img: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(luma(img))
}

/// BT.601 luma (0.299 R + 0.587 G + 0.114 B), rounded to nearest
fn luma(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => map_colors(&other.to_rgb8(), |Rgb([r, g, b])| {
            let y = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
            Luma([((y + 500) / 1000) as u8])
        }),
    }
}

/// Coerce a user blur intensity into a positive odd kernel size
pub fn kernel_size(intensity: i32) -> u32 {
    let size = intensity.max(1) as u32;
    if size % 2 == 0 { size + 1 } else { size }
}

/// Sigma the usual Gaussian kernel construction picks for a kernel of `size` samples
pub fn sigma_for_kernel(size: u32) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Apply Gaussian blur with an odd kernel size; a kernel of 1 is the identity
pub fn gaussian_blur(img: &DynamicImage, size: u32) -> DynamicImage {
    if size <= 1 {
        return img.clone();
    }
    let sigma = sigma_for_kernel(size);
    match img {
        DynamicImage::ImageLuma8(gray) => DynamicImage::ImageLuma8(gaussian_blur_f32(gray, sigma)),
        DynamicImage::ImageRgb8(rgb) => DynamicImage::ImageRgb8(gaussian_blur_f32(rgb, sigma)),
        other => DynamicImage::ImageRgb8(gaussian_blur_f32(&other.to_rgb8(), sigma)),
    }
}

/// Detect edges using Canny edge detector on the grayscale version of `img`
pub fn detect_edges(img: &DynamicImage, low_threshold: f32, high_threshold: f32) -> DynamicImage {
    DynamicImage::ImageLuma8(canny(&luma(img), low_threshold, high_threshold))
}

/// Per-sample `saturate(|v * alpha + beta|)`.
///
/// Brightness is `alpha = 1`, contrast is `beta = 0`. Results that go negative
/// are reflected by the absolute value before clamping, not clipped to 0.
/// Halves round to even.
pub fn scale_abs(img: &DynamicImage, alpha: f64, beta: f64) -> DynamicImage {
    let lut: [u8; 256] = std::array::from_fn(|v| {
        (v as f64 * alpha + beta)
            .abs()
            .round_ties_even()
            .min(255.0) as u8
    });
    match img {
        DynamicImage::ImageLuma8(gray) => DynamicImage::ImageLuma8(apply_lut(gray, &lut)),
        DynamicImage::ImageRgb8(rgb) => DynamicImage::ImageRgb8(apply_lut(rgb, &lut)),
        other => DynamicImage::ImageRgb8(apply_lut(&other.to_rgb8(), &lut)),
    }
}

fn apply_lut<P>(buf: &ImageBuffer<P, Vec<u8>>, lut: &[u8; 256]) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let mut out = buf.clone();
    for sample in out.iter_mut() {
        *sample = lut[*sample as usize];
    }
    out
}

/// Clockwise quarter turns accepted by the rotate operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Cw90,
    Cw180,
    Cw270,
}

impl TryFrom<i32> for Rotation {
    type Error = Error;

    fn try_from(angle: i32) -> Result<Self, Self::Error> {
        match angle {
            90 => Ok(Rotation::Cw90),
            180 => Ok(Rotation::Cw180),
            270 => Ok(Rotation::Cw270),
            _ => Err(Error::invalid(
                "angle",
                angle,
                "angle must be 90, 180, or 270 degrees",
            )),
        }
    }
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Cw270 => 270,
        }
    }
}

pub fn rotate(img: &DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::Cw90 => img.rotate90(),
        Rotation::Cw180 => img.rotate180(),
        Rotation::Cw270 => img.rotate270(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Horizontal,
    Vertical,
}

impl FromStr for FlipDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(FlipDirection::Horizontal),
            "vertical" => Ok(FlipDirection::Vertical),
            other => Err(Error::invalid(
                "direction",
                other,
                "direction must be 'horizontal' or 'vertical'",
            )),
        }
    }
}

impl fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipDirection::Horizontal => write!(f, "horizontal"),
            FlipDirection::Vertical => write!(f, "vertical"),
        }
    }
}

/// Mirror around the vertical axis (horizontal) or the horizontal axis (vertical)
pub fn flip(img: &DynamicImage, direction: FlipDirection) -> DynamicImage {
    match direction {
        FlipDirection::Horizontal => img.fliph(),
        FlipDirection::Vertical => img.flipv(),
    }
}

/// Target size for a scale factor, truncated toward zero
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let w = (width as f64 * scale).floor();
    let h = (height as f64 * scale).floor();
    (w.min(u32::MAX as f64) as u32, h.min(u32::MAX as f64) as u32)
}

/// Whether a `width` x `height` buffer stays within [`MAX_PIXELS`]
pub fn within_pixel_budget(width: u32, height: u32) -> bool {
    u64::from(width)
        .checked_mul(u64::from(height))
        .is_some_and(|pixels| pixels <= MAX_PIXELS)
}

pub fn resize(img: &DynamicImage, width: u32, height: u32, filter: FilterType) -> DynamicImage {
    img.resize_exact(width, height, filter)
}
