//! # CampusSync API
//!
//! The web server for CampusSync. It exposes the campus-wide faculty and room
//! availability views, the caller's weekly schedule, student schedule
//! preferences, the caller's profile status, joining groups by code and
//! lecture summaries.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Unpack requests and call into `campussync-core`
//! - **Middleware**: Session resolution and error mapping
//! - **Config**: Environment configuration
//!
//! Handlers never query the database themselves. They reach persistence only
//! through the boundary traits held in [`ApiState`], which is how the route
//! tests swap in mocks.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Session resolution and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, StatusCode, header},
};
use campussync_core::repository::{
    AvailabilitySource, GroupStore, PreferenceStore, ProfileStore, ScheduleSource, SessionStore,
    SummaryStore,
};
use campussync_db::PgStore;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Each field is one persistence boundary. In production all of them are
/// the same [`PgStore`].
#[derive(Clone)]
pub struct ApiState {
    pub availability: Arc<dyn AvailabilitySource>,
    pub schedules: Arc<dyn ScheduleSource>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub groups: Arc<dyn GroupStore>,
    pub summaries: Arc<dyn SummaryStore>,
    pub sessions: Arc<dyn SessionStore>,
}

impl ApiState {
    pub fn from_pool(db_pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(db_pool));
        Self {
            availability: store.clone(),
            schedules: store.clone(),
            preferences: store.clone(),
            profiles: store.clone(),
            groups: store.clone(),
            summaries: store.clone(),
            sessions: store,
        }
    }
}

/// Builds the application router with every route and request tracing.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Campus-wide free/busy views
        .merge(routes::availability::routes())
        // Personal weekly schedule
        .merge(routes::schedule::routes())
        // Student schedule preferences
        .merge(routes::preferences::routes())
        // Caller's availability and status
        .merge(routes::profile::routes())
        // Joining groups by code
        .merge(routes::groups::routes())
        // Lecture summaries per slot and date
        .merge(routes::summaries::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and database pool
///
/// Installs the global tracing subscriber at the configured level, applies
/// CORS (when origins are configured) and the request timeout, then serves
/// until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_pool(db_pool));
    let app = build_router(state);

    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Timed-out requests answer 408 instead of failing the connection.
    let app = app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: BoxError| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
