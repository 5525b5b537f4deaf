pub mod bookings;
pub mod contact;
pub mod health;
pub mod leads;
pub mod schema;
pub mod templates;

use serde::Deserialize;

/// Query string for the list endpoints; each endpoint supplies its own
/// default limit.
#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}
