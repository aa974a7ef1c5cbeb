use chrono::NaiveDate;

use crate::model::{AvailabilityBlock, RepairStatus};
use crate::timeslot::{Hour, date_key, slot_hour};

/// True iff any maintenance block covers the target slot for this unit at
/// this branch. OR-reduction of the per-block predicate.
pub fn is_blocked(
    unit_name: &str,
    branch_name: &str,
    target_date: NaiveDate,
    target_hour: Hour,
    blocks: &[AvailabilityBlock],
) -> bool {
    blocks
        .iter()
        .any(|block| block_covers(block, unit_name, branch_name, target_date, target_hour))
}

/// Per-block predicate. Blocks match their unit and branch by display name;
/// a record with unparsable date or hour fields is treated as non-blocking
/// so it cannot take a unit offline on bad data.
fn block_covers(
    block: &AvailabilityBlock,
    unit_name: &str,
    branch_name: &str,
    target_date: NaiveDate,
    target_hour: Hour,
) -> bool {
    if block.nama_unit != unit_name || block.nama_cabang != branch_name {
        return false;
    }
    // Only Pending and Selesai ever block.
    if !matches!(
        block.status_perbaikan,
        RepairStatus::Pending | RepairStatus::Selesai
    ) {
        return false;
    }

    let Some((start_date, start_hour)) = start_bound(block) else {
        return false;
    };
    if target_date < start_date {
        return false;
    }
    if target_date == start_date && target_hour < start_hour {
        return false;
    }

    match block.status_perbaikan {
        // Open-ended: everything at or after the start bound is blocked.
        RepairStatus::Pending => true,
        RepairStatus::Selesai => {
            let Some((end_date, end_hour)) = end_bound(block) else {
                return false;
            };
            if target_date > end_date {
                return false;
            }
            if target_date == end_date && target_hour > end_hour {
                return false;
            }
            // Within [start, end] inclusive. The hour bounds only apply on
            // the boundary days and were both checked above.
            true
        }
        RepairStatus::Unknown => false,
    }
}

fn start_bound(block: &AvailabilityBlock) -> Option<(NaiveDate, Hour)> {
    match (
        date_key(&block.tanggal_mulai_blokir),
        slot_hour(&block.jam_mulai_blokir),
    ) {
        (Ok(d), Ok(h)) => Some((d, h)),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(block = %block.id, "block has unparsable start bound, ignoring: {e}");
            metrics::counter!(crate::observability::MALFORMED_RECORDS_TOTAL).increment(1);
            None
        }
    }
}

/// End bound of a Selesai block. A closed block missing either end field is
/// a data-integrity anomaly; it never blocks, and the anomaly is surfaced
/// in the log rather than guessed around.
fn end_bound(block: &AvailabilityBlock) -> Option<(NaiveDate, Hour)> {
    let (Some(raw_date), Some(raw_hour)) = (
        block.tanggal_selesai_blokir.as_deref(),
        block.jam_selesai_blokir.as_deref(),
    ) else {
        tracing::warn!(block = %block.id, "Selesai block is missing its end bound, ignoring");
        metrics::counter!(crate::observability::MALFORMED_RECORDS_TOTAL).increment(1);
        return None;
    };
    match (date_key(raw_date), slot_hour(raw_hour)) {
        (Ok(d), Ok(h)) => Some((d, h)),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(block = %block.id, "block has unparsable end bound, ignoring: {e}");
            metrics::counter!(crate::observability::MALFORMED_RECORDS_TOTAL).increment(1);
            None
        }
    }
}
