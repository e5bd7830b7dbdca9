//! Room availability.
//!
//! A room is available for a stay when no active booking of that room
//! conflicts with it. Two stays conflict when any of these holds for the
//! candidate `c` and an existing booking `e`:
//!
//! 1. `c` starts before `e` and ends after `e` starts
//! 2. `c` starts before `e` ends and ends after `e` ends
//! 3. `c` lies strictly inside `e`
//! 4. `c` and `e` cover exactly the same dates
//!
//! Stays that only touch (one ends when the other starts) never conflict.
//! A candidate inside an existing booking that shares exactly one endpoint
//! with it passes all four checks and is reported as available.

use jiff::Timestamp;

use crate::domain::bookings::records::BookingRecord;

/// The dates a booking occupies its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub from: Timestamp,
    pub till: Timestamp,
}

/// Whether `candidate` conflicts with an `existing` stay.
#[must_use]
pub fn conflicts(candidate: Stay, existing: Stay) -> bool {
    let (c, e) = (candidate, existing);

    (c.from < e.from && c.till > e.from)
        || (c.from < e.till && c.till > e.till)
        || (c.from > e.from && c.till < e.till)
        || (c.from == e.from && c.till == e.till)
}

/// Whether a room holding `bookings` can take `candidate`. Canceled bookings are ignored.
#[must_use]
pub fn is_available<'a>(
    bookings: impl IntoIterator<Item = &'a BookingRecord>,
    candidate: Stay,
) -> bool {
    bookings
        .into_iter()
        .filter(|booking| booking.is_active())
        .all(|booking| !conflicts(candidate, booking.stay()))
}
