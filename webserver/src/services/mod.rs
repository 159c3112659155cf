//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod random_source;
pub mod template_loader;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use random_source::{ConfiguredSource, SeededSource, ThreadRngSource};
pub use template_loader::load_templates;
