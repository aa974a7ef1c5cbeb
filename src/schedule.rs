use chrono::NaiveDate;

use crate::model::{AvailabilityBlock, Booking, Branch, PaymentStatus, SlotStatus, Unit};
use crate::resolver::resolve_parsed;
use crate::timeslot::{self, Hour, TimeError};

/// One resolved cell of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell {
    /// Slot label, e.g. "14.00".
    pub jam: String,
    pub hour: Hour,
    pub status: SlotStatus,
}

/// One unit's row across the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRow {
    pub unit: Unit,
    pub cells: Vec<SlotCell>,
}

/// The admin daily grid: every unit of a branch against the full slot
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub rows: Vec<UnitRow>,
}

/// Build the admin daily schedule for one branch and date.
///
/// Bookings are taken as given (the admin view shows occupancy regardless of
/// payment state; only cancelled bookings are excluded, inside the matcher).
pub fn daily_schedule(
    branch: &Branch,
    units: &[Unit],
    date: &str,
    bookings: &[Booking],
    blocks: &[AvailabilityBlock],
) -> Result<DailySchedule, TimeError> {
    let target_date = timeslot::date_key(date)?;
    let started = std::time::Instant::now();

    let rows = units
        .iter()
        .map(|unit| UnitRow {
            unit: unit.clone(),
            cells: resolve_row(unit, branch, target_date, bookings, blocks),
        })
        .collect();

    metrics::histogram!(crate::observability::GRID_BUILD_DURATION_SECONDS)
        .record(started.elapsed().as_secs_f64());

    Ok(DailySchedule {
        date: target_date,
        rows,
    })
}

/// Build the customer slot-picker row for one unit.
///
/// The public flow only treats paid and payment-pending bookings as
/// occupying; failed or otherwise dead transactions release their slots.
/// Resolution rules past that pre-filter are identical to the admin grid.
pub fn picker_slots(
    branch: &Branch,
    unit: &Unit,
    date: &str,
    bookings: &[Booking],
    blocks: &[AvailabilityBlock],
) -> Result<Vec<SlotCell>, TimeError> {
    let target_date = timeslot::date_key(date)?;
    let candidates: Vec<Booking> = payment_candidates(bookings).into_iter().cloned().collect();
    Ok(resolve_row(unit, branch, target_date, &candidates, blocks))
}

/// Bookings that count as occupying in the public flow: payment `Berhasil`
/// or still `Pending`.
pub fn payment_candidates(bookings: &[Booking]) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|b| {
            matches!(
                b.status_pembayaran,
                PaymentStatus::Berhasil | PaymentStatus::Pending
            )
        })
        .collect()
}

fn resolve_row(
    unit: &Unit,
    branch: &Branch,
    target_date: NaiveDate,
    bookings: &[Booking],
    blocks: &[AvailabilityBlock],
) -> Vec<SlotCell> {
    (timeslot::OPEN_HOUR..=timeslot::LAST_HOUR)
        .map(|hour| {
            let jam = format!("{hour}.00");
            let status = resolve_parsed(unit, branch, target_date, &jam, hour, bookings, blocks);
            SlotCell { jam, hour, status }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingDetail, BookingStatus, RepairStatus};

    fn branch() -> Branch {
        Branch {
            id: "C1".into(),
            nama_cabang: "Cabang Kota".into(),
            alamat: None,
        }
    }

    fn unit(id: &str, nama: &str) -> Unit {
        Unit {
            id: id.into(),
            nama_unit: nama.into(),
            jenis_konsol: "PS5".into(),
            harga: 15000,
        }
    }

    fn booking(payment: PaymentStatus, unit_id: &str, jam: &str) -> Booking {
        Booking {
            id: "B1".into(),
            kode_booking: None,
            nama_pelanggan: "Andi".into(),
            no_hp: "0812".into(),
            cabang_id: "C1".into(),
            tanggal_main: "2025-03-10".into(),
            tanggal_transaksi: None,
            metode_pembayaran: None,
            total_harga: 15000,
            status_pembayaran: payment,
            status_booking: BookingStatus::Aktif,
            detail_booking: vec![BookingDetail {
                unit_id: unit_id.into(),
                tanggal: "2025-03-10".into(),
                jam_main: jam.into(),
                harga: 15000,
            }],
        }
    }

    fn cell_status(cells: &[SlotCell], jam: &str) -> SlotStatus {
        cells.iter().find(|c| c.jam == jam).unwrap().status
    }

    #[test]
    fn grid_covers_every_unit_and_slot() {
        let units = vec![unit("U1", "PS5-01"), unit("U2", "PS5-02")];
        let grid = daily_schedule(&branch(), &units, "2025-03-10", &[], &[]).unwrap();
        assert_eq!(grid.rows.len(), 2);
        for row in &grid.rows {
            assert_eq!(row.cells.len(), 15);
            assert!(row.cells.iter().all(|c| c.status == SlotStatus::Available));
        }
    }

    #[test]
    fn admin_grid_marks_booked_cell() {
        let units = vec![unit("U1", "PS5-01")];
        let bookings = vec![booking(PaymentStatus::Gagal, "U1", "14.00")];
        let grid = daily_schedule(&branch(), &units, "2025-03-10", &bookings, &[]).unwrap();
        // Admin view is not filtered by payment status.
        assert_eq!(cell_status(&grid.rows[0].cells, "14.00"), SlotStatus::Booked);
        assert_eq!(
            cell_status(&grid.rows[0].cells, "15.00"),
            SlotStatus::Available
        );
    }

    #[test]
    fn admin_grid_marks_blocked_cells() {
        let units = vec![unit("U1", "PS5-01")];
        let blocks = vec![AvailabilityBlock {
            id: "K1".into(),
            nama_cabang: "Cabang Kota".into(),
            nama_unit: "PS5-01".into(),
            tanggal_mulai_blokir: "2025-03-10".into(),
            jam_mulai_blokir: "12.00".into(),
            tanggal_selesai_blokir: Some("2025-03-10".into()),
            jam_selesai_blokir: Some("15.00".into()),
            alasan: None,
            status_perbaikan: RepairStatus::Selesai,
        }];
        let grid = daily_schedule(&branch(), &units, "2025-03-10", &[], &blocks).unwrap();
        let cells = &grid.rows[0].cells;
        assert_eq!(cell_status(cells, "11.00"), SlotStatus::Available);
        assert_eq!(cell_status(cells, "12.00"), SlotStatus::Blocked);
        assert_eq!(cell_status(cells, "15.00"), SlotStatus::Blocked);
        assert_eq!(cell_status(cells, "16.00"), SlotStatus::Available);
    }

    #[test]
    fn picker_ignores_failed_payment_bookings() {
        let u = unit("U1", "PS5-01");
        let bookings = vec![booking(PaymentStatus::Gagal, "U1", "14.00")];
        let cells = picker_slots(&branch(), &u, "2025-03-10", &bookings, &[]).unwrap();
        assert_eq!(cell_status(&cells, "14.00"), SlotStatus::Available);
    }

    #[test]
    fn picker_counts_pending_payment_bookings() {
        let u = unit("U1", "PS5-01");
        let bookings = vec![booking(PaymentStatus::Pending, "U1", "14.00")];
        let cells = picker_slots(&branch(), &u, "2025-03-10", &bookings, &[]).unwrap();
        assert_eq!(cell_status(&cells, "14.00"), SlotStatus::Booked);
    }

    #[test]
    fn payment_candidates_filters_dead_transactions() {
        let bookings = vec![
            booking(PaymentStatus::Berhasil, "U1", "10.00"),
            booking(PaymentStatus::Gagal, "U1", "11.00"),
            booking(PaymentStatus::Pending, "U1", "12.00"),
            booking(PaymentStatus::Unknown, "U1", "13.00"),
        ];
        let kept = payment_candidates(&bookings);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn malformed_grid_date_fails() {
        let units = vec![unit("U1", "PS5-01")];
        assert!(daily_schedule(&branch(), &units, "nanti", &[], &[]).is_err());
    }
}
