use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::WorkIntervalSource;
use shared::jwt::{JwtConfig, JwtError};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_user_auth, trace_id, UserAuth,
};
use crate::routes::{health, work_intervals};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
    pub intervals: Arc<dyn WorkIntervalSource>,
}

/// Builds the router. Fails only when the configured JWT keys are unusable.
pub fn create_app(
    config: Config,
    intervals: Arc<dyn WorkIntervalSource>,
) -> Result<Router, JwtError> {
    let config = Arc::new(config);
    let jwt = Arc::new(UserAuth::create_jwt_config(&config.jwt)?);

    let state = AppState {
        config: config.clone(),
        jwt,
        intervals,
    };

    // Empty origin list allows any origin (development)
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let protected_routes = Router::new()
        .route("/api/v1/work-intervals", get(work_intervals::list_intervals))
        .route(
            "/api/v1/work-intervals/coverage",
            get(work_intervals::coverage),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Global middleware (order matters: bottom layers run first)
    Ok(Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state))
}
