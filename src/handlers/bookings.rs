use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::handlers::ListQuery;
use crate::models::{BookingCreate, LeadCreate};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking_id: String,
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingCreate>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    payload.validate()?;

    let booking_id = state.store.insert("booking", &payload)?;

    // Every booking also lands in the CRM as a lead.
    let lead = LeadCreate::from_booking(&payload);
    state.store.insert("lead", &lead)?;

    tracing::info!(booking_id = %booking_id, service = %payload.service, "booking created");
    Ok(Json(CreateBookingResponse {
        success: true,
        booking_id,
    }))
}

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let limit = query.limit.unwrap_or(50);
    let docs = state.store.query("booking", limit)?;
    Ok(Json(docs))
}
