use nfp_codec::{DitherAlgorithm, NfpEncoder, TargetSize};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::sync::Semaphore;

use super::OutputFormat;
use crate::error::ConvertError;

/// Conversion settings, loaded from an optional YAML file and overlaid
/// by command-line flags.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Resize images before encoding them to nfp
    #[serde(default = "default_resize")]
    pub resize: bool,

    /// Resize target width in cells
    #[serde(default = "default_width")]
    pub width: u32,

    /// Resize target height in cells
    #[serde(default = "default_height")]
    pub height: u32,

    /// Apply error diffusion when encoding
    #[serde(default)]
    pub dither: bool,

    /// Error diffusion kernel name (see `DitherAlgorithm`)
    #[serde(default = "default_dither_algorithm")]
    pub dither_algorithm: String,

    /// Output format name for nfp → image conversions
    #[serde(default = "default_format")]
    pub format: String,

    /// Output extension, overrides the format's default
    #[serde(default)]
    pub extension: Option<String>,

    /// Delete each source file after it converted successfully
    #[serde(default)]
    pub remove_source: bool,

    /// Recursively convert a directory tree instead of listed files
    #[serde(default)]
    pub batch_processing: bool,

    /// Batch mode: input file extension, e.g. `.png`
    #[serde(default)]
    pub batch_input_extension: Option<String>,

    /// Batch mode: input root directory
    #[serde(default)]
    pub batch_path: Option<PathBuf>,

    /// Batch mode: output root directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Maximum concurrent conversions (defaults to available parallelism)
    #[serde(default)]
    pub jobs: Option<usize>,
}

fn default_resize() -> bool {
    true
}

fn default_width() -> u32 {
    nfp_codec::preprocess::DEFAULT_WIDTH
}

fn default_height() -> u32 {
    nfp_codec::preprocess::DEFAULT_HEIGHT
}

fn default_dither_algorithm() -> String {
    DitherAlgorithm::default().name().to_string()
}

fn default_format() -> String {
    "PNG".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

impl ConvertConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConvertError> {
        // serde_yaml treats an empty document as null rather than an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Resize target, or `None` when resizing is disabled
    pub fn target_size(&self) -> Option<TargetSize> {
        self.resize
            .then(|| TargetSize::new(self.width, self.height))
    }

    pub fn dither_algorithm(&self) -> Result<DitherAlgorithm, ConvertError> {
        self.dither_algorithm
            .parse()
            .map_err(|e: nfp_codec::ParseAlgorithmError| ConvertError::Config(e.to_string()))
    }

    /// Build the image → nfp encoder these settings describe
    pub fn encoder(&self) -> Result<NfpEncoder, ConvertError> {
        Ok(NfpEncoder::default()
            .target_size(self.target_size())
            .dither(self.dither)
            .algorithm(self.dither_algorithm()?))
    }

    pub fn output_format(&self) -> Result<OutputFormat, ConvertError> {
        self.format.parse()
    }

    /// Extension for images written from nfp files, without a leading dot
    pub fn output_extension(&self) -> Result<String, ConvertError> {
        match &self.extension {
            Some(ext) => Ok(ext.trim_start_matches('.').to_string()),
            None => Ok(self.output_format()?.default_extension()),
        }
    }

    /// Effective concurrency limit, between 1 and the semaphore maximum
    pub fn jobs(&self) -> usize {
        match self.jobs {
            Some(jobs) if jobs > 0 => jobs.min(Semaphore::MAX_PERMITS),
            _ => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            resize: default_resize(),
            width: default_width(),
            height: default_height(),
            dither: false,
            dither_algorithm: default_dither_algorithm(),
            format: default_format(),
            extension: None,
            remove_source: false,
            batch_processing: false,
            batch_input_extension: None,
            batch_path: None,
            output_dir: default_output_dir(),
            jobs: None,
        }
    }
}
