use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Booking request forwarded to the external booking API.
///
/// `appointment_time` carries the slot the patient picked from the booking
/// window, serialized as ISO-8601; `resource_snapshot` is the caller's copy
/// of the resource (doctor, pharmacist, lab test) at selection time, passed
/// through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub resource_id: String,
    pub resource_snapshot: Value,
    pub appointment_time: String,
    pub method: String,
    pub purpose: String,
    pub notes: Option<String>,
}
