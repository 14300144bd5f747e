pub mod config;
pub mod output_format;

pub use config::ConvertConfig;
pub use output_format::OutputFormat;
