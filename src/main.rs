use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lessonbook::config::AppConfig;
use lessonbook::db::{self, DocumentStore};
use lessonbook::handlers;
use lessonbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let store = DocumentStore::new(conn);

    let state = Arc::new(AppState { store, config: config.clone() });

    let app = Router::new()
        .route("/", get(handlers::health::root))
        .route("/test", get(handlers::health::test_database))
        .route("/schema", get(handlers::schema::get_schema))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/leads", post(handlers::leads::create_lead))
        .route("/api/leads", get(handlers::leads::list_leads))
        .route("/api/contact", post(handlers::contact::create_contact))
        .route(
            "/api/email-templates",
            get(handlers::templates::email_templates),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
