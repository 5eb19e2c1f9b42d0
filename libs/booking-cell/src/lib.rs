pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::BookingSubmission;
pub use services::booking::BookingService;
