//! Crate-level error type and `Result` alias.
//! Every processor failure is either "nothing loaded" or "argument outside
//! its domain"; codec and config failures carry their source.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No image loaded to process.")]
    NotLoaded,

    #[error("Invalid argument: {arg}={value} ({reason})")]
    InvalidArgument {
        arg: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Could not load image from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not save image to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(arg: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Error::InvalidArgument {
            arg,
            value: value.to_string(),
            reason,
        }
    }

    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Error::NotLoaded)
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
