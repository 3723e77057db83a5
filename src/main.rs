//! Explorer blog
//!
//! Paginated blog listing served from a headless CMS, as HTML and JSON.

mod api;
mod auth;
mod cms;
mod config;
mod errors;
mod listing;
mod models;
mod navigator;
mod pages;

use std::sync::Arc;

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cms::CmsClient;
use config::Config;
use listing::{InitialPage, PostListing};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub listing: Arc<PostListing>,
    pub initial: Arc<InitialPage>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the CMS client, listing and snapshot from configuration.
    pub fn from_config(config: Config) -> Result<Self, errors::AppError> {
        let client = CmsClient::new(
            &config.cms_endpoint,
            config.cms_access_token.clone(),
            config.cms_timeout,
        )?;
        tracing::debug!("CMS client ready for {}", client.endpoint());
        let listing = Arc::new(PostListing::new(client, config.page_size, config.timezone));
        let initial = Arc::new(InitialPage::new(listing.clone(), config.revalidate_after));

        Ok(Self {
            listing,
            initial,
            config: Arc::new(config),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Explorer blog");
    tracing::info!("CMS endpoint: {}", config.cms_endpoint);
    tracing::info!("Page size: {}", config.page_size);
    tracing::info!("Revalidate after: {:?}", config.revalidate_after);
    tracing::info!("Time zone: {}", config.timezone);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.revalidate_secret.is_none() {
        tracing::warn!(
            "No revalidation secret configured (EXPLORER_REVALIDATE_SECRET). /api/revalidate is open!"
        );
    }

    let bind_addr = config.bind_addr;
    let state = AppState::from_config(config)?;

    // Warm the listing; a failure here is retried on the first request
    tracing::info!(
        "Loading initial listing ({} posts per page)...",
        state.listing.page_size()
    );
    if let Err(e) = state.initial.refresh().await {
        tracing::warn!("Initial listing unavailable: {}", e);
    }

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

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

    // Clone secret for the guard layer
    let secret = state.config.revalidate_secret.clone();

    // Revalidation (secret required when configured)
    let admin_routes = Router::new()
        .route("/revalidate", post(api::revalidate))
        .layer(middleware::from_fn(move |req, next| {
            auth::secret_guard_layer(secret.clone(), req, next)
        }));

    // API routes
    let api_routes = Router::new()
        .route("/posts", get(api::list_posts))
        .merge(admin_routes);

    // Pages
    let page_routes = Router::new()
        .route("/", get(|| async { Redirect::to("/posts") }))
        .route("/posts", get(pages::posts_page));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(health_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for unknown routes.
async fn not_found() -> errors::AppError {
    errors::AppError::NotFound("No such route".to_string())
}
