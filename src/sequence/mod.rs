//! Frame sequence generation and previews.

pub mod generator;

pub use generator::{
    GenerateOpts, PREVIEW_REMAINING_SECONDS, PREVIEW_TOTAL_SECONDS, Progress, SequenceSummary,
    generate, preview,
};
