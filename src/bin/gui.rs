use clap::Parser;
use std::path::PathBuf;

use imgedit::EditorConfig;

#[derive(Parser)]
#[command(name = "imgedit-gui")]
#[command(about = "Desktop image editor: grayscale, blur, edges, brightness, contrast, rotate, flip, resize")]
struct Args {
    /// Image to open on startup
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// JSON config file (thresholds, resize filter, slider ranges)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    imgedit::init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    tracing::info!("starting editor window");
    imgedit::gui::run(config, args.image_path)
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}
