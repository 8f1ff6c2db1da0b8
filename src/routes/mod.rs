//! Router assembly.

mod api;
mod common;

pub use api::{api_routes, ApiDoc};
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Full application: common routes, resource routes, body limit, request tracing.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
