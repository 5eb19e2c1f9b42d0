use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use crate::models::{BookableDay, SlotWindowConfig, TimeSlot};

/// Number of calendar days in a booking window, starting today.
pub const WINDOW_DAYS: u32 = 7;

/// Build the booking window for the next `WINDOW_DAYS` days.
///
/// Pure function of the reference instant and the config: callers read the
/// clock once per generation and pass it in, so the whole window is computed
/// against a single instant and tests can pin it. The output always has
/// exactly `WINDOW_DAYS` entries; a day whose window has already closed (or a
/// config whose closing hour is at or before its opening hour) contributes an
/// empty slot list, which is a normal displayable state rather than an error.
pub fn booking_window(reference: NaiveDateTime, config: &SlotWindowConfig) -> Vec<BookableDay> {
    let window: Vec<BookableDay> = (0..WINDOW_DAYS)
        .map(|offset| day_slots(reference, offset, config))
        .collect();

    debug!(
        "Generated {}-day booking window from {}: {} slots total",
        WINDOW_DAYS,
        reference,
        window.iter().map(|d| d.slots.len()).sum::<usize>()
    );

    window
}

fn day_slots(reference: NaiveDateTime, offset: u32, config: &SlotWindowConfig) -> BookableDay {
    let date = reference.date() + Duration::days(offset as i64);
    let midnight = date.and_time(NaiveTime::MIN);
    let close = midnight + Duration::hours(config.closing_hour as i64);

    let mut cursor = if offset == 0 {
        same_day_cursor(reference, config)
    } else {
        midnight
            + Duration::hours(config.opening_hour as i64)
            + Duration::minutes(config.opening_minute as i64)
    };

    let mut slots = Vec::new();
    if config.slot_interval_minutes == 0 {
        return BookableDay { date, slots };
    }
    while cursor < close {
        slots.push(TimeSlot::at(cursor));
        cursor += Duration::minutes(config.slot_interval_minutes as i64);
    }

    BookableDay { date, slots }
}

/// Starting cursor for the current day, rounded forward from `reference`.
///
/// The rounding rule is deliberately asymmetric, matching the booking pages'
/// historical behavior: the hour advances to the next hour only when the
/// reference is strictly past the opening hour, and the minute snaps to `:30`
/// only when the reference minute is strictly past 30, otherwise to `:00`.
/// A reference of 14:15 therefore starts the day at 15:00, skipping 14:30.
/// Building through midnight-plus-durations keeps the 23:xx case (hour 24)
/// well-defined: the cursor lands past closing and the day comes out empty.
fn same_day_cursor(reference: NaiveDateTime, config: &SlotWindowConfig) -> NaiveDateTime {
    let hour = if reference.hour() > config.opening_hour {
        reference.hour() + 1
    } else {
        config.opening_hour
    };
    let minute = if reference.minute() > 30 { 30 } else { 0 };

    reference.date().and_time(NaiveTime::MIN)
        + Duration::hours(hour as i64)
        + Duration::minutes(minute as i64)
}
