use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::BookingCreate;
use crate::validation;

/// A CRM lead, either submitted directly or derived from a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

fn default_source() -> String {
    "website".to_string()
}

impl LeadCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validation::require_email("email", &self.email)
    }

    /// Every booking produces exactly one lead so the CRM sees the
    /// contact without a separate submission.
    pub fn from_booking(booking: &BookingCreate) -> Self {
        let instructor = booking.instructor.as_deref().unwrap_or("Any");
        Self {
            name: booking.student_name.clone(),
            email: booking.email.clone(),
            phone: Some(booking.phone.clone()),
            source: "booking".to_string(),
            tag: Some(booking.service.clone()),
            message: Some(format!(
                "Booking requested for {} on {} at {} with instructor {}.",
                booking.service, booking.date, booking.time, instructor
            )),
        }
    }
}
