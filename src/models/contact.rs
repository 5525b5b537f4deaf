use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), AppError> {
        validation::require_email("email", &self.email)
    }
}

/// A contact submission stored in the lead collection. Keeps the subject
/// line alongside the usual lead fields.
#[derive(Debug, Serialize)]
pub struct ContactLead {
    #[serde(flatten)]
    pub contact: ContactMessage,
    pub source: &'static str,
}

impl From<ContactMessage> for ContactLead {
    fn from(contact: ContactMessage) -> Self {
        Self {
            contact,
            source: "contact",
        }
    }
}
