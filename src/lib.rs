pub mod config;
pub mod editor;
pub mod error;
pub mod operation;
pub mod ops;
pub mod script;

pub use config::{EditorConfig, ResizeFilter, SliderConfig};
pub use editor::ImageProcessor;
pub use error::{Error, Result};
pub use ops::{FlipDirection, Rotation};
pub use operation::Operation;
pub use script::EditScript;

#[cfg(feature = "gui")]
pub mod gui;

/// Install the `tracing` subscriber used by both binaries.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when verbose.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
