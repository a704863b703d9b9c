mod api;
mod domain;
mod generation;
mod infrastructure;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use api::handlers::summaries;
use api::state::AppState;
use generation::SummaryGenerator;
use infrastructure::llm::{ChatCompletionsGenerator, GenerationConfig};
use infrastructure::tokenizers::HeuristicKoreanTokenizer;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let tokenizer = Arc::new(HeuristicKoreanTokenizer::new());

    // The generative route stays disabled without credentials
    let generator: Option<Arc<dyn SummaryGenerator>> = match GenerationConfig::from_env() {
        Some(config) => {
            tracing::info!("Generative summaries enabled with model {}", config.model);
            Some(Arc::new(ChatCompletionsGenerator::new(config)))
        }
        None => {
            tracing::warn!("SUMMARY_API_KEY not set, generative summaries disabled");
            None
        }
    };

    let state = AppState {
        tokenizer,
        generator,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(summaries::health_check))
        // Summary routes
        .route("/api/summaries", post(summaries::create_summary))
        .route(
            "/api/summaries/generative",
            post(summaries::create_generative_summary),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state);

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
