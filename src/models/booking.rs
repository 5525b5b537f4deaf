use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::validation;

/// A lesson booking request. Date and time are free-form strings; their
/// validity is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validation::require_email("email", &self.email)
    }
}
