use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nfpconv::models::ConvertConfig;
use nfpconv::services::{Converter, PlanBuilder};

/// Convert standard image files to ComputerCraft nfp files, and vice versa.
///
/// Input file type is identified by extension (.nfp, .png, etc.), and
/// output files use the input filename with a new extension.
#[derive(Parser, Debug)]
#[command(name = "nfpconv")]
#[command(version)]
struct Cli {
    /// Input files, nfp or image (must have the correct file extension)
    files: Vec<PathBuf>,

    /// YAML file with default settings; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip resizing images before conversion to nfp
    #[arg(short, long, help_heading = "nfp arguments")]
    skip_resize: bool,

    /// If resizing, new width [default: 164]
    #[arg(short = 'w', long, value_name = "WIDTH", help_heading = "nfp arguments")]
    resize_width: Option<u32>,

    /// If resizing, new height [default: 81]
    #[arg(short = 'H', long, value_name = "HEIGHT", help_heading = "nfp arguments")]
    resize_height: Option<u32>,

    /// Enable error diffusion dithering
    #[arg(short, long, help_heading = "nfp arguments")]
    dither: bool,

    /// Dithering kernel: floyd-steinberg, atkinson, jarvis-judice-ninke,
    /// sierra, sierra-two-row or sierra-lite [default: floyd-steinberg]
    #[arg(long, value_name = "NAME", help_heading = "nfp arguments")]
    dither_algorithm: Option<String>,

    /// Output image format (also the output extension unless --extension
    /// is given) [default: PNG]
    #[arg(short, long, value_name = "FORMAT", help_heading = "image arguments")]
    format: Option<String>,

    /// Output file extension to use instead of the format name. Required
    /// in batch mode.
    #[arg(short, long, help_heading = "image arguments")]
    extension: Option<String>,

    /// Remove the original file after converting it
    #[arg(short, long)]
    remove: bool,

    /// Recursively convert every file under --batch-path that ends with
    /// --batch-input-extension, mirroring the tree under --output-dir
    #[arg(short, long, help_heading = "batch arguments")]
    batch_processing: bool,

    /// Input extension for batch processing, e.g. ".png"
    #[arg(
        long,
        visible_alias = "batch-processing-input-extension",
        value_name = "EXT",
        help_heading = "batch arguments"
    )]
    batch_input_extension: Option<String>,

    /// Input directory for batch processing
    #[arg(
        long,
        visible_alias = "batch-processing-path",
        value_name = "DIR",
        help_heading = "batch arguments"
    )]
    batch_path: Option<PathBuf>,

    /// Output directory for batch processing [default: ./output]
    #[arg(short, long, value_name = "DIR", help_heading = "batch arguments")]
    output_dir: Option<PathBuf>,

    /// Maximum concurrent conversions [default: available cores]
    #[arg(short, long)]
    jobs: Option<usize>,
}

impl Cli {
    /// Overlay command-line flags on the loaded configuration
    fn apply_to(&self, config: &mut ConvertConfig) {
        if self.skip_resize {
            config.resize = false;
        }
        if let Some(width) = self.resize_width {
            config.width = width;
        }
        if let Some(height) = self.resize_height {
            config.height = height;
        }
        if self.dither {
            config.dither = true;
        }
        if let Some(algorithm) = &self.dither_algorithm {
            config.dither_algorithm = algorithm.clone();
        }
        if let Some(format) = &self.format {
            config.format = format.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = Some(extension.clone());
        }
        if self.remove {
            config.remove_source = true;
        }
        if self.batch_processing {
            config.batch_processing = true;
        }
        if let Some(ext) = &self.batch_input_extension {
            config.batch_input_extension = Some(ext.clone());
        }
        if let Some(path) = &self.batch_path {
            config.batch_path = Some(path.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(jobs) = self.jobs {
            config.jobs = Some(jobs);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nfpconv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConvertConfig::load_from_file(path)?,
        None => ConvertConfig::default(),
    };
    cli.apply_to(&mut config);

    let builder = PlanBuilder::new(config.output_extension()?);
    let plan = if config.batch_processing {
        builder.batch(
            config.batch_path.as_deref(),
            config.batch_input_extension.as_deref(),
            &config.output_dir,
            config.extension.as_deref(),
        )?
    } else {
        builder.files(&cli.files)?
    };

    if plan.is_empty() {
        anyhow::bail!("No input files to convert");
    }

    let converter = Converter::new(&config)?;
    tracing::info!(files = plan.len(), jobs = config.jobs(), "Starting conversion");
    let report = converter.run(plan).await;

    if !report.is_success() {
        for failure in &report.failed {
            eprintln!("{}: {}", failure.input.display(), failure.error);
        }
        anyhow::bail!(
            "{} of {} conversions failed",
            report.failed.len(),
            report.total()
        );
    }

    println!("Converted {} file(s)", report.converted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_long_batch_flag_names() {
        let cli = Cli::try_parse_from([
            "nfpconv",
            "--batch-processing",
            "--batch-processing-input-extension",
            ".png",
            "--batch-processing-path",
            "art",
            "-e",
            ".nfp",
        ])
        .unwrap();

        let mut config = ConvertConfig::default();
        cli.apply_to(&mut config);
        assert!(config.batch_processing);
        assert_eq!(config.batch_input_extension.as_deref(), Some(".png"));
        assert_eq!(config.batch_path, Some(PathBuf::from("art")));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["nfpconv", "-s", "-d", "-j", "4", "-f", "gif", "a.png"])
            .unwrap();

        let mut config = ConvertConfig::default();
        cli.apply_to(&mut config);
        assert!(!config.resize);
        assert!(config.dither);
        assert_eq!(config.jobs, Some(4));
        assert_eq!(config.format, "gif");
        assert_eq!(cli.files, vec![PathBuf::from("a.png")]);
    }
}
