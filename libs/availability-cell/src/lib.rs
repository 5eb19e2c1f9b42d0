pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export the core types for external use
pub use models::{BookableDay, ResourceKind, SlotWindowConfig, TimeSlot};
pub use services::window::{booking_window, WINDOW_DAYS};
