use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transfer_server::cache::{CacheConfig, CachedFeedClient};
use transfer_server::feed::{FeedClient, FeedConfig};
use transfer_server::planner::PlanConfig;
use transfer_server::web::{AppState, create_router};

/// Directory served as the static single-page UI.
const STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("TRANSIT_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: TRANSIT_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create feed client
    let feed_config = FeedConfig::new(&api_key);
    let feed_client = FeedClient::new(feed_config).expect("Failed to create feed client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_feeds = CachedFeedClient::new(feed_client, &cache_config);

    // The deployed transfer plan: stations, routes, offsets, buffer
    let plan = PlanConfig::default();

    // Build app state
    let state = AppState::new(cached_feeds, plan);

    // Create router
    let app = create_router(state, STATIC_DIR);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transfer recommender listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health              - Health check");
    println!("  GET  /api/recommendation  - Current transfer recommendation");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
