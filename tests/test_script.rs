//! Integration tests for edit scripts (the CLI's `--op` sequence).

mod common;

use common::*;
use imgedit::script::step_file_name;

fn parse_all(ops: &[&str]) -> Vec<Operation> {
    ops.iter()
        .map(|op| op.parse().expect("valid operation"))
        .collect()
}

#[test]
fn test_full_example_sequence() -> anyhow::Result<()> {
    let (mut processor, _file) = loaded_processor();
    let script = EditScript::new(parse_all(&[
        "grayscale",
        "blur=5",
        "edges",
        "brightness=50",
        "contrast=1.5",
        "rotate=90",
        "flip=horizontal",
        "resize=0.5",
    ]));

    script.run(&mut processor)?;

    assert_eq!(processor.dimensions()?, (10, 20));
    assert_eq!(processor.get_image()?.color().channel_count(), 1);
    Ok(())
}

#[test]
fn test_run_stops_at_first_error() -> anyhow::Result<()> {
    let (mut processor, _file) = loaded_processor();
    let script = EditScript::new(parse_all(&["rotate=90", "rotate=45", "resize=0.5"]));

    let err = script.run(&mut processor).unwrap_err();
    assert!(err.is_invalid_argument());
    // first step applied, third never reached
    assert_eq!(processor.dimensions()?, (20, 40));
    Ok(())
}

#[test]
fn test_empty_script_is_noop() -> anyhow::Result<()> {
    let (mut processor, _file) = loaded_processor();
    let before = processor.get_image()?.clone();

    EditScript::default().run(&mut processor)?;
    assert_eq!(processor.get_image()?, &before);
    Ok(())
}

#[test]
fn test_debug_output_per_step() -> anyhow::Result<()> {
    let (mut processor, _file) = loaded_processor();
    let dir = tempfile::TempDir::new()?;
    let debug_dir = dir.path().join("debug");

    let script = EditScript::new(vec![])
        .add_operation(Operation::Grayscale)
        .add_operation(Operation::Blur(4))
        .with_debug(&debug_dir)?;
    script.run(&mut processor)?;

    assert!(debug_dir.join("00_input.png").exists());
    assert!(debug_dir.join("01_grayscale.png").exists());
    assert!(debug_dir.join("02_gaussian_blur.png").exists());
    assert_eq!(std::fs::read_dir(&debug_dir)?.count(), 3);
    Ok(())
}

#[test]
fn test_debug_dir_must_be_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("leftover.txt"), "x")?;

    let err = EditScript::default().with_debug(dir.path()).unwrap_err();
    assert!(err.is_invalid_argument());
    Ok(())
}

#[test]
fn test_step_file_names() {
    assert_eq!(step_file_name(1, &Operation::Edges), "01_edge_detection.png");
    assert_eq!(step_file_name(12, &Operation::Rotate(90)), "12_rotate.png");
}

#[test]
fn test_script_uses_processor_config() -> anyhow::Result<()> {
    let file = create_test_image(10, 10);
    let config = EditorConfig {
        resize_filter: ResizeFilter::Nearest,
        ..EditorConfig::default()
    };
    let mut processor = ImageProcessor::with_config(config);
    processor.load_image(file.path())?;

    EditScript::new(parse_all(&["resize=2"])).run(&mut processor)?;

    // nearest-neighbour doubling copies each source pixel into a 2x2 block
    let img = processor.get_image()?.to_rgb8();
    assert_eq!(img.dimensions(), (20, 20));
    assert_eq!(img.get_pixel(6, 8), img.get_pixel(7, 9));
    Ok(())
}
