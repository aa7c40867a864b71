//! HTTP API Layer
//!
//! This crate exposes the claims workflow over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers per resource, with role gating
//! - **Middleware**: session-token authentication, audit logging
//! - **DTOs**: request/response objects; wire-type normalization lives here
//! - **Error Handling**: consistent `{success, error, message}` bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, login, records};
use crate::middleware::{audit_middleware, auth_middleware};
use domain_claims::ClaimService;
use infra_store::{InMemoryClaimStore, InMemoryRecordStore, Snapshot};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClaimService>,
    pub records: Arc<InMemoryRecordStore>,
    pub claims: Arc<InMemoryClaimStore>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the state from loaded stores
    pub fn new(
        records: InMemoryRecordStore,
        claims: InMemoryClaimStore,
        config: ApiConfig,
    ) -> Self {
        let records = Arc::new(records);
        let claims = Arc::new(claims);
        let service = Arc::new(ClaimService::new(records.clone(), claims.clone()));
        Self {
            service,
            records,
            claims,
            config,
        }
    }

    /// Writes a snapshot of both stores after a mutation
    ///
    /// Best-effort: the working set lives in memory and the invariants do
    /// not depend on the file, so a failed save is logged, not propagated.
    pub fn persist(&self) {
        let snapshot = Snapshot::capture(&self.records, &self.claims);
        if let Err(err) = snapshot.save(Path::new(&self.config.data_file)) {
            tracing::warn!(error = %err, file = %self.config.data_file, "failed to persist snapshot");
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/login", post(login::login));

    // Record routes
    let record_routes = Router::new()
        .route("/", get(records::list_records))
        .route("/", post(records::create_record))
        .route("/claimable", get(records::claimable_records));

    // Claim routes
    let claim_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/", post(claims::create_claim))
        .route("/summary", get(claims::summary))
        .route("/:id", put(claims::update_status));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/api/records", record_routes)
        .nest("/api/claims", claim_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
