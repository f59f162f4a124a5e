pub mod assets;
pub mod config;
pub mod middleware;
pub mod navigation;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Build the router for a loaded configuration.
///
/// Transport layers (compression, minification, tracing) are added by the
/// `serve` command; tests drive this router directly.
pub fn create_app(config: &Config) -> axum::Router {
    routes::router(AppState::new(config)).layer(axum::middleware::from_fn(
        middleware::cache_control_middleware,
    ))
}
