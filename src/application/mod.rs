//! Application layer: chart loading and step scripts
//!
//! This layer orchestrates domain logic and owns file access.

pub mod chart;
pub mod error;
pub mod error_ext;
pub mod script;

pub use chart::{expand_path, load_chart, parse_chart, ChartFormat};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use script::{apply_steps, Step, StepOutcome};
