use clap::Parser;
use std::path::PathBuf;

use imgedit::{EditScript, EditorConfig, ImageProcessor, Operation};

#[derive(Parser)]
#[command(name = "imgedit")]
#[command(about = "Apply simple edits (grayscale, blur, edges, brightness, ...) to an image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Where to write the result (format from extension)
    #[arg(short, long, value_name = "FILE", default_value = "processed_image.png")]
    output: PathBuf,

    /// Edit to apply, in order: grayscale, edges, blur=N, brightness=X,
    /// contrast=X, rotate=90|180|270, flip=horizontal|vertical, resize=X
    #[arg(long = "op", value_name = "OP")]
    ops: Vec<Operation>,

    /// JSON config file (thresholds, resize filter)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Save the image after every step to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    imgedit::init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let mut processor = ImageProcessor::with_config(config);
    processor.load_image(&args.image_path)?;

    let (width, height) = processor.dimensions()?;
    if args.verbose {
        println!("Image loaded: {}x{}\n", width, height);
    }

    let mut script = EditScript::new(args.ops);
    if let Some(debug_dir) = args.debug_out {
        script = script.with_debug(debug_dir)?;
    }
    script.run(&mut processor)?;

    processor.save_image(&args.output)?;

    let (width, height) = processor.dimensions()?;
    println!(
        "Applied {} edit(s); saved {}x{} image to {}",
        script.operations().len(),
        width,
        height,
        args.output.display()
    );

    Ok(())
}
