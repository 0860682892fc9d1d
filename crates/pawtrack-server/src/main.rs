use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod application;
mod auth;
mod config;
mod models;
mod routes;

use application::{PetService, ReminderService};
use config::ServerConfig;
use pawtrack::{InMemoryPetRepository, InMemoryReminderRepository};

/// Type aliases for application services with concrete repository implementations
pub type AppPetService = PetService<InMemoryPetRepository, InMemoryReminderRepository>;
pub type AppReminderService = ReminderService<InMemoryReminderRepository, InMemoryPetRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pet_service: Arc<AppPetService>,
    pub reminder_service: Arc<AppReminderService>,
    /// Bearer key required on /api routes; `None` disables authentication
    pub api_key: Option<String>,
}

impl AppState {
    /// Fresh, empty in-memory repositories wired into both services
    pub fn in_memory(config: &ServerConfig) -> Self {
        let pet_repo = Arc::new(InMemoryPetRepository::new());
        let reminder_repo = Arc::new(InMemoryReminderRepository::new());

        Self {
            pet_service: Arc::new(PetService::new(pet_repo.clone(), reminder_repo.clone())),
            reminder_service: Arc::new(ReminderService::new(
                reminder_repo,
                pet_repo,
                config.clock,
            )),
            api_key: config.api_key.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "PawTrack API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    // Protected routes (require authentication when a key is configured)
    let protected_routes = Router::new()
        .merge(routes::pet::router())
        .merge(routes::day::router())
        .merge(routes::reminder::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pawtrack=info,pawtrack_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("🐾 PawTrack API initializing...");

    let config = ServerConfig::from_env()?;

    if config.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No PAWTRACK_API_KEY set - authentication disabled");
    }
    tracing::info!(
        "🕒 Calendar days start at UTC{:+} minutes",
        config.clock.offset_minutes()
    );

    let router = build_router(AppState::in_memory(&config));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ PawTrack API listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
