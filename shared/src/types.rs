//! Core types for the business headline service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::errors::{ValidationError, ValidationResult};

/// Global process identifier - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// The HTTP backend serving the dashboard
    WebServer,
    /// Nothing has been initialized yet (unit tests, library use)
    Unknown,
}

impl ProcessId {
    /// Initialize the global process ID for webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Get the global process ID, `Unknown` until an init_* call
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Unknown)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Unknown => write!(f, "unknown"),
        }
    }
}

/// Mock rating returned for every submitted business
pub const MOCK_RATING: f64 = 4.3;

/// Mock review count returned for every submitted business
pub const MOCK_REVIEWS: u32 = 127;

/// Business details submitted from the dashboard form
///
/// Missing JSON fields deserialize to empty strings so that `validate`
/// can report them by name instead of failing inside serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

impl BusinessInput {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Reject empty or whitespace-only fields, name first
    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "location" });
        }
        Ok(())
    }
}

/// Rating, review count and headline shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSnapshot {
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
}

impl BusinessSnapshot {
    /// Wrap a headline with the fixed mock rating and review count
    pub fn with_headline(headline: String) -> Self {
        Self {
            rating: MOCK_RATING,
            reviews: MOCK_REVIEWS,
            headline,
        }
    }
}

/// Query parameters of the regenerate route, both optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegenerateQuery {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl RegenerateQuery {
    /// Build from raw query pairs; the first value of a repeated key wins
    /// and unknown keys are ignored
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut query.name,
                "location" => &mut query.location,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Response body of the regenerate route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineResponse {
    pub headline: String,
}
