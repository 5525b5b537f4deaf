pub mod booking;
pub mod contact;
pub mod lead;
pub mod template;

pub use booking::BookingCreate;
pub use contact::{ContactLead, ContactMessage};
pub use lead::LeadCreate;
pub use template::EmailTemplate;
