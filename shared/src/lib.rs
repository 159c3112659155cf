//! Shared types for the business headline service
//!
//! Contains the JSON contract exchanged with the dashboard frontend, the
//! process label used by logging, and errors that belong to the contract.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
