//! Webserver state management
//!
//! Everything here is either immutable after startup or atomic, so the
//! state is shared between requests without locks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::core::{HeadlineGenerator, HeadlineTemplates};
use crate::traits::RandomSource;

/// State shared by all request handlers
pub struct WebServerState<R: RandomSource> {
    pub generator: HeadlineGenerator<R>,
    requests_served: AtomicU64,
    server_start_time: Instant,
}

impl<R: RandomSource> WebServerState<R> {
    pub fn new(templates: HeadlineTemplates, random: R) -> Self {
        Self {
            generator: HeadlineGenerator::new(templates, random),
            requests_served: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count one handled request, returning the new total
    pub fn record_request(&self) -> u64 {
        self.requests_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get_requests_served(&self) -> u64 {
        self.requests_served.load(Ordering::Relaxed)
    }

    pub fn template_count(&self) -> usize {
        self.generator.templates().len()
    }
}
