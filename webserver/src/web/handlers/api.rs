//! REST API handlers
//!
//! JSON endpoints called by the business dashboard

use axum::{
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::core::build_snapshot;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::RandomSource;
use shared::{
    BusinessInput, BusinessSnapshot, HeadlineResponse, ProcessId, RegenerateQuery, process_debug, process_warn,
};

/// Submit business info - POST /business-data
pub async fn submit_business<R>(
    State(state): State<Arc<WebServerState<R>>>,
    payload: Result<Json<BusinessInput>, JsonRejection>,
) -> WebServerResult<Json<BusinessSnapshot>>
where
    R: RandomSource + 'static,
{
    state.record_request();

    let Json(input) = payload.map_err(|rejection| {
        process_warn!(ProcessId::current(), "⚠️ Rejected business-data body: {}", rejection.body_text());
        WebServerError::invalid_request(rejection.body_text())
    })?;

    let snapshot = build_snapshot(&input).map_err(|e| {
        process_warn!(ProcessId::current(), "⚠️ Invalid business submission: {}", e);
        WebServerError::from(e)
    })?;

    process_debug!(
        ProcessId::current(),
        "📝 Snapshot for '{}' in '{}': {}",
        input.name,
        input.location,
        snapshot.headline
    );
    Ok(Json(snapshot))
}

/// Regenerate a random headline - GET /regenerate-headline
pub async fn regenerate_headline<R>(
    State(state): State<Arc<WebServerState<R>>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<HeadlineResponse>
where
    R: RandomSource + 'static,
{
    state.record_request();

    // Repeated keys keep their first value; an unparseable query falls back to the defaults
    let query = match pairs {
        Ok(Query(pairs)) => RegenerateQuery::from_pairs(pairs),
        Err(rejection) => {
            process_warn!(ProcessId::current(), "⚠️ Ignoring unreadable query: {}", rejection.body_text());
            RegenerateQuery::default()
        }
    };

    let name = query.name.as_deref().unwrap_or_default();
    let location = query.location.as_deref().unwrap_or_default();
    let headline = state.generator.generate_random_headline(name, location);

    process_debug!(ProcessId::current(), "🎲 Regenerated headline: {}", headline);
    Json(HeadlineResponse { headline })
}

/// Health check - GET /health
pub async fn health_check<R>(State(state): State<Arc<WebServerState<R>>>) -> Json<Value>
where
    R: RandomSource + 'static,
{
    Json(json!({
        "status": "healthy",
        "uptime_seconds": state.get_uptime_seconds(),
        "requests_served": state.get_requests_served(),
        "template_count": state.template_count(),
    }))
}
