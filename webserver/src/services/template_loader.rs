//! Headline template loading
//!
//! Reads a JSON array of template strings at startup

use std::path::Path;
use tokio::fs;

use crate::core::HeadlineTemplates;
use crate::error::{WebServerError, WebServerResult};
use shared::{ProcessId, process_info};

/// Load templates from `path`, or the built-in set when no path is given
pub async fn load_templates(path: Option<&Path>) -> WebServerResult<HeadlineTemplates> {
    let Some(path) = path else {
        return Ok(HeadlineTemplates::builtin());
    };

    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| WebServerError::config(format!("Cannot read templates file {}: {}", path.display(), e)))?;
    let texts: Vec<String> = serde_json::from_str(&raw)?;
    let templates = HeadlineTemplates::new(texts)?;

    process_info!(
        ProcessId::current(),
        "📄 Loaded {} headline templates from {}",
        templates.len(),
        path.display()
    );
    Ok(templates)
}
