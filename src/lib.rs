pub mod analyzer;
pub mod args;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod utils;

pub use analyzer::analyze;
pub use args::Args;
pub use pipeline::run;
pub use stats::AnalysisResult;
