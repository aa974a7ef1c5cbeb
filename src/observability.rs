use std::net::SocketAddr;

/// Counter: slot-status resolutions performed.
pub const RESOLUTIONS_TOTAL: &str = "slotgrid_resolutions_total";

/// Counter: records skipped for unparsable dates or slot labels.
pub const MALFORMED_RECORDS_TOTAL: &str = "slotgrid_malformed_records_total";

/// Histogram: daily-grid build duration in seconds.
pub const GRID_BUILD_DURATION_SECONDS: &str = "slotgrid_grid_build_duration_seconds";

/// Counter: branch snapshots dropped from the cache.
pub const SNAPSHOT_INVALIDATIONS_TOTAL: &str = "slotgrid_snapshot_invalidations_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
