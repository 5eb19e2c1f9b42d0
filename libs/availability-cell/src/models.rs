use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The kinds of resources a booking window can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Doctor,
    Pharmacist,
    Lab,
}

impl ResourceKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "doctor" => Some(ResourceKind::Doctor),
            "pharmacist" => Some(ResourceKind::Pharmacist),
            "lab" => Some(ResourceKind::Lab),
            _ => None,
        }
    }

    /// Business-hours window used when generating slots for this resource.
    pub fn window_config(&self) -> SlotWindowConfig {
        match self {
            ResourceKind::Doctor | ResourceKind::Pharmacist => SlotWindowConfig::consultation(),
            ResourceKind::Lab => SlotWindowConfig::lab(),
        }
    }
}

/// Business-hours configuration for slot generation.
///
/// `opening_minute` applies to future days only; the same-day cursor is
/// derived from the reference instant (see `services::window`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlotWindowConfig {
    pub opening_hour: u32,
    pub opening_minute: u32,
    /// Hard cutoff hour of day, minutes fixed at zero. Exclusive bound.
    pub closing_hour: u32,
    pub slot_interval_minutes: u32,
}

impl SlotWindowConfig {
    /// Doctor and pharmacist consultations: 10:00 to 21:00.
    pub const fn consultation() -> Self {
        Self {
            opening_hour: 10,
            opening_minute: 0,
            closing_hour: 21,
            slot_interval_minutes: 30,
        }
    }

    /// Lab sample collection: 08:00 to 18:00.
    pub const fn lab() -> Self {
        Self {
            opening_hour: 8,
            opening_minute: 0,
            closing_hour: 18,
            slot_interval_minutes: 30,
        }
    }
}

/// A single bookable time slot within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub datetime: NaiveDateTime,
    pub display_time: String,
    pub booked: bool,
}

impl TimeSlot {
    /// A fresh, unbooked slot at the given instant. Availability is never
    /// checked at generation time; the booking API is the system of record.
    pub fn at(datetime: NaiveDateTime) -> Self {
        Self {
            datetime,
            display_time: datetime.format("%-I:%M %p").to_string(),
            booked: false,
        }
    }
}

/// One calendar day of the booking window, slots in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookableDay {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}
