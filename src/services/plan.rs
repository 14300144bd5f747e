use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::error::ConvertError;

/// Extension that marks a file as nfp (matched case-insensitively)
pub const NFP_EXTENSION: &str = "nfp";

/// Which way a file is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ImageToNfp,
    NfpToImage,
}

impl Direction {
    /// Decide the direction from the file extension: `.nfp` in any case
    /// decodes, everything else encodes.
    pub fn for_path(path: &Path) -> Result<Self, ConvertError> {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case(NFP_EXTENSION) => Ok(Direction::NfpToImage),
            Some(_) => Ok(Direction::ImageToNfp),
            None => Err(ConvertError::MissingExtension(path.to_path_buf())),
        }
    }
}

/// One input/output pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub direction: Direction,
}

/// Every conversion to perform, resolved up front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionPlan {
    jobs: Vec<ConversionJob>,
}

impl ConversionPlan {
    fn checked(jobs: Vec<ConversionJob>) -> Result<Self, ConvertError> {
        match find_conflict(&jobs) {
            Some(error) => Err(error),
            None => Ok(Self { jobs }),
        }
    }

    pub fn jobs(&self) -> &[ConversionJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl IntoIterator for ConversionPlan {
    type Item = ConversionJob;
    type IntoIter = std::vec::IntoIter<ConversionJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.into_iter()
    }
}

/// Resolves input paths into a [`ConversionPlan`].
///
/// Single-file mode writes outputs beside their inputs, batch mode mirrors
/// a directory tree under an output root. Both produce the same plan type
/// and go through the same converter.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    image_extension: String,
}

impl PlanBuilder {
    /// `image_extension` is used for images decoded from nfp files in
    /// single-file mode.
    pub fn new(image_extension: impl Into<String>) -> Self {
        Self {
            image_extension: normalize_extension(&image_extension.into()).to_string(),
        }
    }

    /// Plan the listed files: `art/logo.png` → `art/logo.nfp`,
    /// `art/logo.nfp` → `art/logo.<image extension>`.
    pub fn files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<ConversionPlan, ConvertError> {
        let jobs = paths
            .iter()
            .map(|path| {
                let input = path.as_ref().to_path_buf();
                let direction = Direction::for_path(&input)?;
                let output = match direction {
                    Direction::ImageToNfp => input.with_extension(NFP_EXTENSION),
                    Direction::NfpToImage => input.with_extension(&self.image_extension),
                };
                Ok(ConversionJob {
                    input,
                    output,
                    direction,
                })
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;

        ConversionPlan::checked(jobs)
    }

    /// Plan every file under `root` whose name ends with `input_extension`.
    ///
    /// Outputs land under `output_root` at the same relative path with
    /// the extension replaced by `output_extension`. Extensions may be
    /// given with or without the leading dot; matching is case-sensitive.
    pub fn batch(
        &self,
        root: Option<&Path>,
        input_extension: Option<&str>,
        output_root: &Path,
        output_extension: Option<&str>,
    ) -> Result<ConversionPlan, ConvertError> {
        let root = root.ok_or(ConvertError::BatchConfig("an input path"))?;
        let input_extension =
            input_extension.ok_or(ConvertError::BatchConfig("an input extension"))?;
        let output_extension =
            output_extension.ok_or(ConvertError::BatchConfig("an output extension"))?;

        let suffix = format!(".{}", normalize_extension(input_extension));
        let output_extension = normalize_extension(output_extension);

        let root = strip_current_dir(root);
        let pattern = if root.as_os_str().is_empty() {
            "**/*".to_string()
        } else {
            format!(
                "{}/**/*",
                glob::Pattern::escape(&root.to_string_lossy())
            )
        };

        let mut jobs = Vec::new();
        for entry in glob::glob(&pattern)? {
            let input = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(
                        path = %e.path().display(),
                        error = %e.error(),
                        "Skipping unreadable entry"
                    );
                    continue;
                }
            };

            let matches = input
                .file_name()
                .map(|name| name.to_string_lossy().ends_with(&suffix))
                .unwrap_or(false);
            if !matches || !input.is_file() {
                continue;
            }

            let direction = match Direction::for_path(&input) {
                Ok(direction) => direction,
                Err(error) => {
                    tracing::warn!(%error, "Skipping batch input");
                    continue;
                }
            };
            let relative = input.strip_prefix(&root).unwrap_or(&input);
            let output = output_root
                .join(relative)
                .with_extension(output_extension);

            jobs.push(ConversionJob {
                input,
                output,
                direction,
            });
        }

        jobs.sort_by(|a, b| a.input.cmp(&b.input));
        tracing::debug!(root = %root.display(), files = jobs.len(), "Discovered batch inputs");

        ConversionPlan::checked(jobs)
    }
}

/// Jobs run concurrently, so no output may be written twice or replace a
/// file another job reads.
fn find_conflict(jobs: &[ConversionJob]) -> Option<ConvertError> {
    let inputs: HashSet<&Path> = jobs.iter().map(|job| job.input.as_path()).collect();
    let mut outputs = HashSet::with_capacity(jobs.len());

    for job in jobs {
        if inputs.contains(job.output.as_path()) {
            return Some(ConvertError::OutputIsInput(job.output.clone()));
        }
        if !outputs.insert(job.output.as_path()) {
            return Some(ConvertError::DuplicateOutput(job.output.clone()));
        }
    }
    None
}

fn normalize_extension(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}

/// `./in` and `in` must produce the same relative output paths
fn strip_current_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_direction_for_path() {
        assert_eq!(
            Direction::for_path(Path::new("a/logo.nfp")).unwrap(),
            Direction::NfpToImage
        );
        assert_eq!(
            Direction::for_path(Path::new("LOGO.NFP")).unwrap(),
            Direction::NfpToImage
        );
        assert_eq!(
            Direction::for_path(Path::new("photo.jpeg")).unwrap(),
            Direction::ImageToNfp
        );
        assert!(matches!(
            Direction::for_path(Path::new("README")),
            Err(ConvertError::MissingExtension(_))
        ));
    }

    #[test]
    fn test_files_writes_beside_inputs() {
        let plan = PlanBuilder::new("png")
            .files(&["art/logo.gif", "art/icon.NFP"])
            .unwrap();

        assert_eq!(
            plan.jobs(),
            &[
                ConversionJob {
                    input: PathBuf::from("art/logo.gif"),
                    output: PathBuf::from("art/logo.nfp"),
                    direction: Direction::ImageToNfp,
                },
                ConversionJob {
                    input: PathBuf::from("art/icon.NFP"),
                    output: PathBuf::from("art/icon.png"),
                    direction: Direction::NfpToImage,
                },
            ]
        );
    }

    #[test]
    fn test_files_normalizes_image_extension() {
        let plan = PlanBuilder::new(".jpg").files(&["a.nfp"]).unwrap();
        assert_eq!(plan.jobs()[0].output, PathBuf::from("a.jpg"));
    }

    #[test]
    fn test_files_rejects_missing_extension() {
        let err = PlanBuilder::new("png").files(&["a.png", "Makefile"]).unwrap_err();
        assert!(matches!(err, ConvertError::MissingExtension(p) if p == Path::new("Makefile")));
    }

    #[test]
    fn test_files_rejects_shared_output() {
        let err = PlanBuilder::new("png")
            .files(&["art/logo.png", "art/logo.bmp"])
            .unwrap_err();
        assert!(matches!(err, ConvertError::DuplicateOutput(p) if p == Path::new("art/logo.nfp")));
    }

    #[test]
    fn test_files_rejects_output_over_input() {
        let err = PlanBuilder::new("nfp").files(&["x.nfp"]).unwrap_err();
        assert!(matches!(err, ConvertError::OutputIsInput(p) if p == Path::new("x.nfp")));

        // each file would overwrite the other's source while it is being read
        let err = PlanBuilder::new("png")
            .files(&["a.png", "a.nfp"])
            .unwrap_err();
        assert!(matches!(err, ConvertError::OutputIsInput(_)));
    }

    #[test]
    fn test_files_empty() {
        let plan = PlanBuilder::new("png").files::<&str>(&[]).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_batch_requires_settings() {
        let builder = PlanBuilder::new("png");
        let out = Path::new("out");

        assert!(matches!(
            builder.batch(None, Some(".png"), out, Some(".nfp")),
            Err(ConvertError::BatchConfig("an input path"))
        ));
        assert!(matches!(
            builder.batch(Some(Path::new("in")), None, out, Some(".nfp")),
            Err(ConvertError::BatchConfig("an input extension"))
        ));
        assert!(matches!(
            builder.batch(Some(Path::new("in")), Some(".png"), out, None),
            Err(ConvertError::BatchConfig("an output extension"))
        ));
    }

    #[test]
    fn test_strip_current_dir() {
        assert_eq!(strip_current_dir(Path::new("./in/art")), PathBuf::from("in/art"));
        assert_eq!(strip_current_dir(Path::new(".")), PathBuf::new());
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".png"), "png");
        assert_eq!(normalize_extension("png"), "png");
        assert_eq!(normalize_extension(" .nfp "), "nfp");
    }
}
