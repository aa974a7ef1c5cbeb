use serde::{Deserialize, Serialize};

/// A physical rental location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub nama_cabang: String,
    #[serde(default)]
    pub alamat: Option<String>,
}

/// One rentable console station within a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub nama_unit: String,
    pub jenis_konsol: String,
    /// Hourly price in rupiah.
    pub harga: i64,
}

/// Payment state as reported by the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Berhasil,
    Pending,
    Gagal,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Aktif,
    TidakAktif,
    Dibatalkan,
    Selesai,
    #[serde(other)]
    Unknown,
}

/// Repair state of a maintenance window. `Pending` blocks are open-ended;
/// `Selesai` blocks carry a definite end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairStatus {
    Pending,
    Selesai,
    #[serde(other)]
    Unknown,
}

/// One reserved (unit, date, slot) triple within a booking.
/// Occupies exactly one discrete hour slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetail {
    pub unit_id: String,
    /// Raw wire date. May be date-only or a full ISO datetime; normalized
    /// through `timeslot::date_key` at comparison time.
    pub tanggal: String,
    /// Slot label, e.g. "14.00".
    pub jam_main: String,
    pub harga: i64,
}

/// A confirmed or pending customer reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub kode_booking: Option<String>,
    pub nama_pelanggan: String,
    pub no_hp: String,
    pub cabang_id: String,
    pub tanggal_main: String,
    #[serde(default)]
    pub tanggal_transaksi: Option<String>,
    #[serde(default)]
    pub metode_pembayaran: Option<String>,
    pub total_harga: i64,
    pub status_pembayaran: PaymentStatus,
    pub status_booking: BookingStatus,
    #[serde(default)]
    pub detail_booking: Vec<BookingDetail>,
}

impl Booking {
    /// Cancelled bookings never occupy a slot.
    pub fn is_cancelled(&self) -> bool {
        self.status_booking == BookingStatus::Dibatalkan
    }
}

/// A maintenance window removing a unit from availability.
///
/// Matches its unit and branch by display name, not id. The API supplies no
/// stable reference on these records, so a rename orphans existing blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBlock {
    pub id: String,
    pub nama_cabang: String,
    pub nama_unit: String,
    pub tanggal_mulai_blokir: String,
    /// Slot label of the first blocked hour, e.g. "10.00".
    pub jam_mulai_blokir: String,
    #[serde(default)]
    pub tanggal_selesai_blokir: Option<String>,
    #[serde(default)]
    pub jam_selesai_blokir: Option<String>,
    #[serde(default)]
    pub alasan: Option<String>,
    pub status_perbaikan: RepairStatus,
}

/// Resolved state of one (unit, date, slot) cell. `Booked` takes precedence
/// over `Blocked` when both would hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Booked,
    Blocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_wire_values() {
        let s: PaymentStatus = serde_json::from_str("\"Berhasil\"").unwrap();
        assert_eq!(s, PaymentStatus::Berhasil);
        let s: PaymentStatus = serde_json::from_str("\"Gagal\"").unwrap();
        assert_eq!(s, PaymentStatus::Gagal);
    }

    #[test]
    fn unrecognized_payment_status_maps_to_unknown() {
        let s: PaymentStatus = serde_json::from_str("\"Refund\"").unwrap();
        assert_eq!(s, PaymentStatus::Unknown);
    }

    #[test]
    fn unrecognized_repair_status_maps_to_unknown() {
        let s: RepairStatus = serde_json::from_str("\"Dijadwalkan\"").unwrap();
        assert_eq!(s, RepairStatus::Unknown);
    }

    #[test]
    fn cancelled_booking_detected() {
        let b = Booking {
            id: "B1".into(),
            kode_booking: None,
            nama_pelanggan: "Andi".into(),
            no_hp: "0812".into(),
            cabang_id: "C1".into(),
            tanggal_main: "2025-03-10".into(),
            tanggal_transaksi: None,
            metode_pembayaran: None,
            total_harga: 0,
            status_pembayaran: PaymentStatus::Pending,
            status_booking: BookingStatus::Dibatalkan,
            detail_booking: vec![],
        };
        assert!(b.is_cancelled());
    }

    #[test]
    fn booking_deserializes_without_optional_fields() {
        let raw = r#"{
            "id": "B1",
            "nama_pelanggan": "Andi",
            "no_hp": "0812",
            "cabang_id": "C1",
            "tanggal_main": "2025-03-10",
            "total_harga": 30000,
            "status_pembayaran": "Pending",
            "status_booking": "Aktif"
        }"#;
        let b: Booking = serde_json::from_str(raw).unwrap();
        assert!(b.kode_booking.is_none());
        assert!(b.detail_booking.is_empty());
    }

    #[test]
    fn block_deserializes_open_ended() {
        let raw = r#"{
            "id": "K1",
            "nama_cabang": "Cabang Kota",
            "nama_unit": "PS5-01",
            "tanggal_mulai_blokir": "2025-03-09",
            "jam_mulai_blokir": "10.00",
            "status_perbaikan": "Pending"
        }"#;
        let k: AvailabilityBlock = serde_json::from_str(raw).unwrap();
        assert_eq!(k.status_perbaikan, RepairStatus::Pending);
        assert!(k.tanggal_selesai_blokir.is_none());
        assert!(k.jam_selesai_blokir.is_none());
    }
}
