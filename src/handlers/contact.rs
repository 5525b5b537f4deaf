use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{ContactLead, ContactMessage};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub lead_id: String,
}

// POST /api/contact
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactMessage>,
) -> Result<Json<ContactResponse>, AppError> {
    payload.validate()?;

    let lead_id = state.store.insert("lead", &ContactLead::from(payload))?;

    tracing::info!(lead_id = %lead_id, "contact message stored as lead");
    Ok(Json(ContactResponse {
        success: true,
        lead_id,
    }))
}
