mod maintenance;
mod occupancy;

pub use maintenance::is_blocked;
pub use occupancy::is_occupied;

use chrono::NaiveDate;

use crate::model::{AvailabilityBlock, Booking, Branch, SlotStatus, Unit};
use crate::timeslot::{self, Hour, TimeError};

/// Resolve one (unit, date, slot) cell against a branch's bookings and
/// maintenance blocks.
///
/// `Booked` wins over `Blocked` when both would independently hold;
/// otherwise the slot is `Available`. Pure: identical inputs always yield
/// the identical status.
///
/// Callers pre-filter `bookings` to the relevant branch (and, for the
/// public flow, to payable payment statuses). `blocks` may be the raw
/// unfiltered list; branch and unit matching happens per block, by name.
pub fn resolve_slot_status(
    unit: &Unit,
    branch: &Branch,
    date: &str,
    slot: &str,
    bookings: &[Booking],
    blocks: &[AvailabilityBlock],
) -> Result<SlotStatus, TimeError> {
    let target_date = timeslot::date_key(date)?;
    let target_hour = timeslot::slot_hour(slot)?;
    Ok(resolve_parsed(
        unit,
        branch,
        target_date,
        slot,
        target_hour,
        bookings,
        blocks,
    ))
}

/// Resolution with the query already normalized. Grid iteration parses the
/// date once and the slot vocabulary carries known hours, so the per-cell
/// path skips re-parsing.
pub(crate) fn resolve_parsed(
    unit: &Unit,
    branch: &Branch,
    target_date: NaiveDate,
    slot: &str,
    target_hour: Hour,
    bookings: &[Booking],
    blocks: &[AvailabilityBlock],
) -> SlotStatus {
    metrics::counter!(crate::observability::RESOLUTIONS_TOTAL).increment(1);
    if occupancy::is_occupied(unit, target_date, slot, bookings) {
        SlotStatus::Booked
    } else if maintenance::is_blocked(
        &unit.nama_unit,
        &branch.nama_cabang,
        target_date,
        target_hour,
        blocks,
    ) {
        SlotStatus::Blocked
    } else {
        SlotStatus::Available
    }
}
