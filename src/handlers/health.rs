use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

// GET /
pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "message": format!("{} API is running", state.config.brand_name)
    }))
}

#[derive(Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

// GET /test
//
// Advisory only: storage faults degrade the report instead of failing
// the request.
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let database_url = if std::env::var("DATABASE_URL").is_ok() {
        "set"
    } else {
        "not set"
    };

    let response = match state.store.collection_names() {
        Ok(mut collections) => {
            collections.truncate(15);
            DiagnosticsResponse {
                backend: "running".to_string(),
                database: "connected".to_string(),
                database_url: database_url.to_string(),
                database_name: state.config.database_url.clone(),
                connection_status: "connected".to_string(),
                collections,
            }
        }
        Err(e) => {
            tracing::warn!("diagnostics: storage check failed: {e}");
            DiagnosticsResponse {
                backend: "running".to_string(),
                database: format!("error: {e}"),
                database_url: database_url.to_string(),
                database_name: state.config.database_url.clone(),
                connection_status: "degraded".to_string(),
                collections: vec![],
            }
        }
    };

    Json(response)
}
