//! HTTP route definitions.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::monitoring;
use crate::state::AppState;

/// Optional parts of the router.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Directory served under `/static`. Not mounted when `None`.
    pub static_dir: Option<PathBuf>,
}

impl RouterOptions {
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// GET    /                                   - Redirect to /static/index.html
/// GET    /activities                         - List activities
/// POST   /activities/{activity_name}/signup     ?email=...
/// POST   /activities/{activity_name}/unregister ?email=...
/// GET    /health                             - Health check
/// GET    /static/*                           - Front-end assets (optional)
/// ```
pub fn create_router(state: Arc<AppState>, options: RouterOptions) -> Router {
    let activity_routes = Router::new()
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{activity_name}/signup", post(handlers::signup))
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::unregister),
        )
        .with_state(state.clone());

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .with_state(state);

    let mut router = Router::new()
        .route("/", get(handlers::root))
        .merge(activity_routes)
        .merge(monitoring_routes);

    if let Some(dir) = options.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
