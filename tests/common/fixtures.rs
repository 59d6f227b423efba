use image::{ImageBuffer, Luma, Rgb};
use tempfile::NamedTempFile;

/// Creates a width x height RGB gradient test image and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image(width: u32, height: u32) -> NamedTempFile {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128u8])
    });
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a single-channel test image with a bright square in the middle
pub fn create_gray_test_image(size: u32) -> NamedTempFile {
    let img = ImageBuffer::from_fn(size, size, |x, y| {
        let inside = x > size / 4 && x < 3 * size / 4 && y > size / 4 && y < 3 * size / 4;
        Luma([if inside { 230u8 } else { 20u8 }])
    });
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a processor with a loaded 40x20 test image.
/// Returns both the processor and the temp file (which must be kept alive).
pub fn loaded_processor() -> (imgedit::ImageProcessor, NamedTempFile) {
    let file = create_test_image(40, 20);
    let mut processor = imgedit::ImageProcessor::new();
    processor
        .load_image(file.path())
        .expect("Failed to load test image");
    (processor, file)
}
