use std::path::PathBuf;

use nfp_codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File has no extension: {}", .0.display())]
    MissingExtension(PathBuf),

    #[error("More than one input converts to {}", .0.display())]
    DuplicateOutput(PathBuf),

    #[error("Output would overwrite an input: {}", .0.display())]
    OutputIsInput(PathBuf),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Batch processing requires {0}")]
    BatchConfig(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid batch pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Conversion task failed: {0}")]
    Task(String),
}

impl ConvertError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
