//! WebServer entry point
//!
//! Parses configuration from flags or environment, loads the headline
//! templates and serves the dashboard API until Ctrl+C.

use clap::Parser;
use shared::{ProcessId, logging, process_info};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;

use webserver::{ConfiguredSource, WebServer, WebServerError, WebServerResult, services::load_templates};

/// Command line arguments, each overridable from the environment
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Business dashboard API: snapshots and SEO headlines")]
struct Args {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "HEADLINE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Tracing endpoint URL (if set, traces will be sent here)
    #[arg(long, env = "TRACE_ENDPOINT")]
    trace_ep: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// JSON file holding an array of headline templates
    #[arg(long, env = "HEADLINE_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Seed for reproducible headline selection
    #[arg(long, env = "HEADLINE_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // A missing .env file is normal
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    ProcessId::init_webserver();

    let trace_endpoint = args.trace_ep.clone().map(logging::TracingEndpoint::new);
    logging::init_tracing_with_endpoint_and_level(trace_endpoint, Some(&args.log_level));
    logging::log_startup(ProcessId::current(), &format!("webserver on {}:{}", args.host, args.port));

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid listen address: {}", e)))?;

    let templates = load_templates(args.templates.as_deref()).await.inspect_err(|e| {
        logging::log_error(ProcessId::current(), "Loading headline templates", e);
    })?;

    if let Some(seed) = args.seed {
        process_info!(ProcessId::current(), "🎲 Headline selection seeded with {}", seed);
    }
    let random = ConfiguredSource::from_seed(args.seed);

    let mut webserver = WebServer::new(templates, random);

    // Set up graceful shutdown
    let shutdown_sender = webserver.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(ProcessId::current(), "Signal handling", &err);
            }
        }
    });

    webserver.run(http_addr).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
