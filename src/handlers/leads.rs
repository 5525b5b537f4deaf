use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::handlers::ListQuery;
use crate::models::LeadCreate;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateLeadResponse {
    pub success: bool,
    pub lead_id: String,
}

// POST /api/leads
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LeadCreate>,
) -> Result<Json<CreateLeadResponse>, AppError> {
    payload.validate()?;

    let lead_id = state.store.insert("lead", &payload)?;

    tracing::info!(lead_id = %lead_id, source = %payload.source, "lead created");
    Ok(Json(CreateLeadResponse {
        success: true,
        lead_id,
    }))
}

// GET /api/leads
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let limit = query.limit.unwrap_or(100);
    let docs = state.store.query("lead", limit)?;
    Ok(Json(docs))
}
