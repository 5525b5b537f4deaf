use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::models::EmailTemplate;
use crate::services::templates;
use crate::state::AppState;

// GET /api/email-templates
pub async fn email_templates(State(state): State<Arc<AppState>>) -> Json<Vec<EmailTemplate>> {
    Json(templates::built_in(
        &state.config.brand_name,
        &state.config.study_guide_url,
    ))
}
