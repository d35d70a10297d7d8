//! Realty Gateway
//!
//! A REST gateway fronting the remote listings API: public listing endpoints with
//! local filtering and pagination, an admin CRUD surface, the contact relay and
//! the EMI calculator.

mod api;
mod auth;
mod config;
mod errors;
mod finance;
mod listing;
mod models;
mod store;
mod upstream;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::Store;
use upstream::ApiClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<ApiClient>,
    pub store: Arc<Store>,
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

    tracing::info!("Starting Realty Gateway");
    tracing::info!("Upstream API: {}", config.api_base_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if the admin PSK is not configured
    if config.admin_psk.is_none() {
        tracing::warn!("No admin PSK configured (REALTY_ADMIN_PSK). The admin surface is open!");
    }

    let upstream = Arc::new(ApiClient::new(&config.api_base_url));
    let store = Arc::new(Store::new());

    // Warm the collection caches; failures leave cold caches for the first
    // request to fill
    tracing::info!("Priming collection caches...");
    store.prime(&upstream).await;

    // Create application state
    let state = AppState {
        upstream,
        store,
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

    // Clone PSK for the auth layer
    let psk = state.config.admin_psk.clone();

    // Public routes
    let public_routes = Router::new()
        // Properties
        .route("/properties", get(api::list_properties))
        .route("/properties/featured", get(api::featured_properties))
        // Brokers
        .route("/brokers", get(api::list_brokers))
        .route("/brokers", post(api::register_broker))
        // Requirements
        .route("/property-requirements", get(api::list_requirements))
        // Projects
        .route("/redevelopment", get(api::list_redevelopment))
        .route("/commercial", get(api::list_commercial))
        // Contact relay and EMI calculator
        .route("/contact", post(api::submit_contact))
        .route("/emi", get(api::calculate_emi));

    // Admin routes, PSK-guarded when a key is configured
    let admin_routes = Router::new()
        // Properties
        .route("/properties", get(api::admin_list_properties))
        .route("/properties", post(api::create_property))
        .route("/properties/{id}", put(api::update_property))
        .route("/properties/{id}", delete(api::delete_property))
        // Brokers
        .route("/brokers", get(api::admin_list_brokers))
        .route("/brokers/{id}", put(api::update_broker))
        .route("/brokers/{id}", delete(api::delete_broker))
        // Requirements
        .route("/property-requirements", post(api::create_requirement))
        .route("/property-requirements/{id}", put(api::update_requirement))
        .route(
            "/property-requirements/{id}",
            delete(api::delete_requirement),
        )
        // Redevelopment projects
        .route("/redevelopment", post(api::create_redevelopment))
        .route("/redevelopment/{id}", put(api::update_redevelopment))
        .route("/redevelopment/{id}", delete(api::delete_redevelopment))
        // Commercial projects
        .route("/commercial", post(api::create_commercial))
        .route("/commercial/{id}", put(api::update_commercial))
        .route("/commercial/{id}", delete(api::delete_commercial))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", public_routes.nest("/admin", admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
