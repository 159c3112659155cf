//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod business;
pub mod headline;

// Re-export commonly used types
pub use business::build_snapshot;
pub use headline::{
    DEFAULT_LOCATION, DEFAULT_NAME, HeadlineGenerator, HeadlineTemplate, HeadlineTemplates,
    generate_deterministic_headline,
};
