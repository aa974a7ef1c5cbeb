use chrono::NaiveDate;

use crate::model::{Booking, Unit};
use crate::timeslot::date_key;

/// True iff a non-cancelled booking holds a detail for exactly this
/// (unit, date, slot) triple.
///
/// This is an exact-match lookup, not an interval overlap: every
/// `BookingDetail` occupies one discrete hour slot, and slot labels are
/// compared verbatim. A detail with an unparsable date is skipped with a
/// warning so one bad record cannot hide availability for the rest of the
/// schedule.
pub fn is_occupied(unit: &Unit, target_date: NaiveDate, slot: &str, bookings: &[Booking]) -> bool {
    for booking in bookings {
        if booking.is_cancelled() {
            continue;
        }
        for detail in &booking.detail_booking {
            if detail.unit_id != unit.id || detail.jam_main != slot {
                continue;
            }
            match date_key(&detail.tanggal) {
                Ok(day) if day == target_date => return true,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        booking = %booking.id,
                        tanggal = %detail.tanggal,
                        "skipping booking detail with unparsable date: {e}"
                    );
                    metrics::counter!(crate::observability::MALFORMED_RECORDS_TOTAL)
                        .increment(1);
                }
            }
        }
    }
    false
}
