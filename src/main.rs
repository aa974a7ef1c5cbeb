use std::path::PathBuf;

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use tracing::info;

use slotgrid::model::SlotStatus;
use slotgrid::{decode, observability, schedule};

/// Schedule inspector: loads JSON snapshots of the booking API's data from
/// disk and prints one branch's daily grid.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("SLOTGRID_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    observability::init(metrics_port);

    let data_dir = std::env::var("SLOTGRID_DATA_DIR").unwrap_or_else(|_| "./data".into());
    let date = std::env::var("SLOTGRID_DATE")
        .unwrap_or_else(|_| chrono::Local::now().date_naive().to_string());
    let branch_id = std::env::var("SLOTGRID_BRANCH_ID").ok();

    let dir = PathBuf::from(&data_dir);
    let branches = decode::decode_branches(&std::fs::read_to_string(dir.join("branches.json"))?)?;
    let units = decode::decode_units(&std::fs::read_to_string(dir.join("units.json"))?)?;
    let bookings = decode::decode_bookings(&std::fs::read_to_string(dir.join("bookings.json"))?)?;
    let blocks = decode::decode_blocks(&std::fs::read_to_string(dir.join("blocks.json"))?)?;

    let branch = match &branch_id {
        Some(id) => branches
            .iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| format!("unknown branch id: {id}"))?,
        None => branches.first().ok_or("no branches in snapshot")?,
    };

    let branch_bookings: Vec<_> = bookings
        .into_iter()
        .filter(|b| b.cabang_id == branch.id)
        .collect();

    info!(
        cabang = %branch.nama_cabang,
        %date,
        units = units.len(),
        bookings = branch_bookings.len(),
        blocks = blocks.len(),
        "resolving daily schedule"
    );

    let grid = schedule::daily_schedule(branch, &units, &date, &branch_bookings, &blocks)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    let mut header = vec!["Unit".to_string()];
    if let Some(row) = grid.rows.first() {
        header.extend(row.cells.iter().map(|c| c.jam.clone()));
    }
    table.set_header(header);
    for row in &grid.rows {
        let mut cells = vec![row.unit.nama_unit.clone()];
        cells.extend(row.cells.iter().map(|c| {
            match c.status {
                SlotStatus::Available => "-",
                SlotStatus::Booked => "B",
                SlotStatus::Blocked => "X",
            }
            .to_string()
        }));
        table.add_row(cells);
    }

    println!("{} | {}", branch.nama_cabang, grid.date);
    println!("{table}");
    println!("-: available  B: booked  X: blocked");

    Ok(())
}
