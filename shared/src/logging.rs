//! Shared logging utilities for consistent tracing across the service

use crate::types::ProcessId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{Event, Subscriber, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::Context;

/// Tracing endpoint configuration
#[derive(Debug, Clone)]
pub struct TracingEndpoint {
    pub url: String,
    pub batch_size: usize,
    pub flush_interval: Duration,
}

impl TracingEndpoint {
    pub fn new(url: String) -> Self {
        Self {
            url,
            batch_size: 20,
            flush_interval: Duration::from_millis(500),
        }
    }
}

/// Structured trace event posted to the tracing endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TraceEvent {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub target: String,
    pub message: String,
    pub process: String,
    pub fields: HashMap<String, serde_json::Value>,
}

/// Layer forwarding process-tagged events to a remote collector in batches
pub struct HttpTracingLayer {
    sender: mpsc::UnboundedSender<TraceEvent>,
}

impl HttpTracingLayer {
    /// Must be called from inside a tokio runtime
    pub fn new(endpoint: TracingEndpoint) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<TraceEvent>();
        tokio::spawn(forward_batches(endpoint, rx));
        HttpTracingLayer { sender: tx }
    }
}

async fn forward_batches(endpoint: TracingEndpoint, mut rx: mpsc::UnboundedReceiver<TraceEvent>) {
    let client = reqwest::Client::new();
    let mut buffer = Vec::with_capacity(endpoint.batch_size);
    let mut flush_timer = tokio::time::interval(endpoint.flush_interval);

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(event) => {
                    buffer.push(event);
                    if buffer.len() >= endpoint.batch_size {
                        send_batch(&client, &endpoint.url, &mut buffer).await;
                    }
                }
                None => {
                    send_batch(&client, &endpoint.url, &mut buffer).await;
                    break;
                }
            },
            _ = flush_timer.tick() => {
                send_batch(&client, &endpoint.url, &mut buffer).await;
            }
        }
    }
}

async fn send_batch(client: &reqwest::Client, url: &str, buffer: &mut Vec<TraceEvent>) {
    if buffer.is_empty() {
        return;
    }
    let batch = std::mem::take(buffer);

    // Logging from here would feed back into this layer, so failures go to stderr.
    match client.post(url).json(&batch).send().await {
        Ok(response) if !response.status().is_success() => {
            eprintln!("❌ Trace endpoint rejected {} events: HTTP {}", batch.len(), response.status());
        }
        Ok(_) => {}
        Err(e) => eprintln!("❌ Failed to send trace batch: {e}"),
    }
}

impl<S> tracing_subscriber::Layer<S> for HttpTracingLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = TraceVisitor::default();
        event.record(&mut visitor);

        // Only events emitted through the process_* macros are shipped
        if !visitor.fields.contains_key("process") {
            return;
        }

        let trace_event = TraceEvent {
            timestamp: Utc::now(),
            level: metadata.level().to_string(),
            target: metadata.target().to_string(),
            message: visitor.message,
            process: ProcessId::current().to_string(),
            fields: visitor.fields,
        };

        let _ = self.sender.send(trace_event);
    }
}

/// Collects the message and structured fields of one event
#[derive(Default)]
struct TraceVisitor {
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl tracing::field::Visit for TraceVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{value:?}"));
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(value.to_string()));
        }
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields.insert(field.name().to_string(), serde_json::Value::Bool(value));
    }
}

/// Filter directive for the webserver and its HTTP stack at a base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("webserver={base_level},shared={base_level},tower_http=warn,axum={base_level}")
}

/// `RUST_LOG` wins over the configured level when it is set
fn build_env_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)))
}

/// Stdout-only subscriber: env filter plus compact fmt output
pub fn stdout_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    use tracing_subscriber::{fmt, prelude::*};

    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact(),
    )
}

/// Stdout subscriber that also ships process-tagged events to `endpoint`.
/// Must be called from inside a tokio runtime.
pub fn endpoint_subscriber(filter: EnvFilter, endpoint: TracingEndpoint) -> impl Subscriber + Send + Sync + 'static {
    use tracing_subscriber::{fmt, prelude::*};

    tracing_subscriber::registry()
        .with(filter)
        .with(HttpTracingLayer::new(endpoint))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
}

/// Initialize tracing subscriber with optional endpoint and log level
pub fn init_tracing_with_endpoint_and_level(endpoint: Option<TracingEndpoint>, log_level: Option<&str>) {
    use tracing_subscriber::prelude::*;

    let filter = build_env_filter(log_level);
    match endpoint {
        Some(endpoint) => {
            println!("📡 Tracing endpoint configured: {}", endpoint.url);
            endpoint_subscriber(filter, endpoint).init();
        }
        None => stdout_subscriber(filter).init(),
    }
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for process-aware info logging
#[macro_export]
macro_rules! process_info {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::info!(
            process = %$process_id,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for process-aware warning logging
#[macro_export]
macro_rules! process_warn {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            process = %$process_id,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for process-aware error logging
#[macro_export]
macro_rules! process_error {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::error!(
            process = %$process_id,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for process-aware debug logging
#[macro_export]
macro_rules! process_debug {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            process = %$process_id,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

pub fn log_startup(process_id: &ProcessId, details: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

pub fn log_shutdown(process_id: &ProcessId, reason: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

pub fn log_error(process_id: &ProcessId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        process = %process_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

pub fn log_success(process_id: &ProcessId, message: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_uses_base_level() {
        let directive = filter_directive(Some("debug"));
        assert!(directive.contains("webserver=debug"));
        assert!(directive.contains("shared=debug"));
        assert!(directive.contains("tower_http=warn"));
    }

    #[test]
    fn test_filter_directive_defaults_to_info() {
        assert!(filter_directive(None).starts_with("webserver=info"));
    }

    #[test]
    fn test_stdout_subscriber_applies_directive() {
        let subscriber = stdout_subscriber(EnvFilter::new(filter_directive(Some("debug"))));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "webserver", tracing::Level::DEBUG));
            assert!(!tracing::enabled!(target: "webserver", tracing::Level::TRACE));
            assert!(!tracing::enabled!(target: "tower_http", tracing::Level::INFO));
        });
    }

    #[tokio::test]
    async fn test_endpoint_subscriber_applies_directive() {
        let endpoint = TracingEndpoint::new("http://127.0.0.1:9/traces".to_string());
        let subscriber = endpoint_subscriber(EnvFilter::new(filter_directive(None)), endpoint);

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "shared", tracing::Level::INFO));
            assert!(!tracing::enabled!(target: "shared", tracing::Level::DEBUG));
            tracing::info!(target: "shared", process = "webserver", "forwarded event");
        });
    }

    #[test]
    fn test_trace_event_serializes_fields() {
        let mut fields = HashMap::new();
        fields.insert("route".to_string(), serde_json::Value::String("/health".to_string()));
        let event = TraceEvent {
            timestamp: Utc::now(),
            level: "INFO".to_string(),
            target: "webserver".to_string(),
            message: "served".to_string(),
            process: ProcessId::WebServer.to_string(),
            fields,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["process"], "webserver");
        assert_eq!(value["fields"]["route"], "/health");
    }
}
