pub mod converter;
pub mod plan;

pub use converter::{ConversionReport, Converter, FailedConversion};
pub use plan::{ConversionJob, ConversionPlan, Direction, PlanBuilder};
