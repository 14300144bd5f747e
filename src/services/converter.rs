use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{ImageFormat, ImageReader};
use nfp_codec::{NfpDecoder, NfpEncoder};
use tokio::sync::Semaphore;

use super::plan::{ConversionJob, ConversionPlan, Direction};
use crate::error::ConvertError;
use crate::models::ConvertConfig;

/// A conversion that did not complete
#[derive(Debug)]
pub struct FailedConversion {
    pub input: PathBuf,
    pub error: ConvertError,
}

/// Outcome of [`Converter::run`]
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: usize,
    pub failed: Vec<FailedConversion>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.converted + self.failed.len()
    }
}

/// Per-file conversion settings shared by all workers
#[derive(Debug)]
struct Settings {
    encoder: NfpEncoder,
    decoder: NfpDecoder,
    image_format: ImageFormat,
    remove_source: bool,
}

/// Runs a [`ConversionPlan`], one blocking task per file.
#[derive(Debug, Clone)]
pub struct Converter {
    settings: Arc<Settings>,
    jobs: usize,
}

impl Converter {
    pub fn new(config: &ConvertConfig) -> Result<Self, ConvertError> {
        Ok(Self {
            settings: Arc::new(Settings {
                encoder: config.encoder()?,
                decoder: NfpDecoder::default(),
                image_format: config.output_format()?.image_format(),
                remove_source: config.remove_source,
            }),
            jobs: config.jobs(),
        })
    }

    /// Convert a single job on the current thread
    pub fn convert(&self, job: &ConversionJob) -> Result<(), ConvertError> {
        self.settings.convert(job)
    }

    /// Convert every job in the plan.
    ///
    /// At most `jobs` files are processed at once. A failure is logged and
    /// recorded in the report; the remaining jobs still run.
    pub async fn run(&self, plan: ConversionPlan) -> ConversionReport {
        let permits = self.jobs.clamp(1, Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut handles = Vec::with_capacity(plan.len());

        for job in plan {
            let permit = semaphore.clone().acquire_owned().await;
            let settings = self.settings.clone();
            let input = job.input.clone();

            // CPU-bound codec work and file IO stay off the async workers
            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                settings.convert(&job)
            });
            handles.push((input, handle));
        }

        let mut report = ConversionReport::default();
        for (input, handle) in handles {
            let result = handle
                .await
                .map_err(|e| ConvertError::Task(e.to_string()))
                .and_then(|r| r);

            match result {
                Ok(()) => report.converted += 1,
                Err(error) => {
                    tracing::error!(input = %input.display(), %error, "Conversion failed");
                    report.failed.push(FailedConversion { input, error });
                }
            }
        }

        tracing::info!(
            converted = report.converted,
            failed = report.failed.len(),
            "Conversion finished"
        );
        report
    }
}

impl Settings {
    fn convert(&self, job: &ConversionJob) -> Result<(), ConvertError> {
        create_parent_dir(&job.output)?;

        match job.direction {
            Direction::ImageToNfp => self.encode_file(&job.input, &job.output)?,
            Direction::NfpToImage => self.decode_file(&job.input, &job.output)?,
        }

        tracing::info!(
            input = %job.input.display(),
            output = %job.output.display(),
            "Converted"
        );

        if self.remove_source {
            std::fs::remove_file(&job.input).map_err(|e| ConvertError::io(&job.input, e))?;
            tracing::debug!(input = %job.input.display(), "Removed source");
        }

        Ok(())
    }

    fn encode_file(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let image = ImageReader::open(input)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| ConvertError::io(input, e))?
            .decode()?;
        let document = self.encoder.encode_dynamic(&image)?;
        std::fs::write(output, document.to_string()).map_err(|e| ConvertError::io(output, e))
    }

    fn decode_file(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let text = std::fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))?;
        let image = self.decoder.decode(&text)?;
        image.save_with_format(output, self.image_format)?;
        Ok(())
    }
}

fn create_parent_dir(path: &Path) -> Result<(), ConvertError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))
        }
        _ => Ok(()),
    }
}
