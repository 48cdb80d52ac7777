//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::returns::{AnalysisStore, EvidenceMatcher, WordOverlapMatcher};
use crate::kernel::ServerDeps;
use crate::server::routes::{
    analyze_csv_handler, analyze_handler, copilot_handler, health_handler, root_causes_handler,
    sustainability_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
    pub store: Arc<AnalysisStore>,
    pub matcher: Arc<dyn EvidenceMatcher>,
}

impl AxumAppState {
    pub fn new(deps: ServerDeps) -> Self {
        Self {
            deps: Arc::new(deps),
            store: Arc::new(AnalysisStore::new()),
            matcher: Arc::new(WordOverlapMatcher),
        }
    }

    /// Swap the evidence matching strategy.
    pub fn with_matcher(mut self, matcher: Arc<dyn EvidenceMatcher>) -> Self {
        self.matcher = matcher;
        self
    }
}

/// Build the Axum application router with fresh state
pub fn build_app(deps: ServerDeps) -> Router {
    build_router(AxumAppState::new(deps))
}

/// Build the router around existing state (tests keep a handle on the store)
pub fn build_router(state: AxumAppState) -> Router {
    // CORS configuration - allow any origin; the dashboard runs on its own dev server
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/analyze/csv", post(analyze_csv_handler))
        .route("/root-causes", post(root_causes_handler))
        .route("/root_causes", post(root_causes_handler))
        .route("/copilot", post(copilot_handler))
        .route("/sustainability", get(sustainability_handler))
        .route("/sustainability/", get(sustainability_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
