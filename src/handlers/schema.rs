use axum::Json;
use serde_json::{json, Value};

// GET /schema
//
// Fixed description of the stored collections, for the database viewer.
pub async fn get_schema() -> Json<Value> {
    Json(json!({
        "collections": [
            {
                "name": "booking",
                "fields": [
                    "student_name", "email", "phone", "service", "instructor",
                    "date", "time", "pickup_location", "notes"
                ]
            },
            {
                "name": "lead",
                "fields": ["name", "email", "phone", "source", "tag", "message"]
            }
        ]
    }))
}
