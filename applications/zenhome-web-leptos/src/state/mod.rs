pub mod session;
pub mod thresholds;

pub use thresholds::{provide_thresholds_context, use_thresholds, ThresholdsContext};
