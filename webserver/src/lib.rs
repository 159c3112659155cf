//! Webserver library for the business headline service
//!
//! Serves the JSON API behind the business dashboard: mock business
//! snapshots with a fixed SEO headline, and random headline regeneration
//! from a configurable template set.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{TemplateError, WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{MockRandomSource, RandomSource};

// Re-export service implementations
pub use services::{ConfiguredSource, SeededSource, ThreadRngSource};
