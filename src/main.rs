//! Sanjeevani Hospital Website Backend
//!
//! REST backend with SQLite persistence serving the public content proxy
//! and the admin portal API.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod proxy;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sanjeevani Hospital Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Store time budget: {:?}", config.store_timeout);

    // Warn if portal credentials are not configured
    if config.admin_password.is_none() {
        tracing::warn!(
            "No admin password configured (SANJEEVANI_ADMIN_PASSWORD). Portal login is disabled!"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public content proxy: reads never fail outward, the contact form does
    let proxy_routes = Router::new()
        .route("/proxy/services", get(api::proxy_services))
        .route("/proxy/treatments", get(api::proxy_treatments))
        .route("/proxy/settings", get(api::proxy_settings))
        .route("/proxy/contact", post(api::submit_contact));

    // Admin portal API
    let admin_routes = Router::new()
        // Login
        .route("/auth/login", post(auth::login))
        // Services
        .route("/services", get(api::list_services))
        .route("/services", post(api::create_service))
        .route("/services/{id}", delete(api::delete_service))
        // Treatments
        .route("/treatments", get(api::list_treatments))
        .route("/treatments", post(api::create_treatment))
        .route("/treatments/{id}", delete(api::delete_treatment))
        // Contact messages
        .route("/messages", get(api::list_messages))
        .route("/messages/{id}/read", put(api::mark_message_read))
        .route("/messages/{id}", delete(api::delete_message))
        // Settings
        .route("/settings", get(api::get_settings))
        .route("/settings", put(api::update_settings));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", proxy_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
