use std::sync::Arc;

use dashmap::DashMap;

use crate::model::{AvailabilityBlock, Booking, Branch, Unit};

/// One branch's fetched collections, treated as an immutable value for the
/// duration of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSnapshot {
    pub branch: Branch,
    pub units: Vec<Unit>,
    pub bookings: Vec<Booking>,
    pub blocks: Vec<AvailabilityBlock>,
}

/// Caller-side cache of branch snapshots, keyed by branch id.
///
/// The host fetches from the booking API, puts the decoded snapshot here,
/// and invalidates the key after any mutating form submit so the next
/// render re-fetches. No TTLs and no background eviction; staleness is
/// entirely the caller's contract.
#[derive(Default)]
pub struct SnapshotCache {
    snapshots: DashMap<String, Arc<BranchSnapshot>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self {
            snapshots: DashMap::new(),
        }
    }

    pub fn get(&self, branch_id: &str) -> Option<Arc<BranchSnapshot>> {
        self.snapshots.get(branch_id).map(|e| e.value().clone())
    }

    pub fn put(&self, snapshot: BranchSnapshot) -> Arc<BranchSnapshot> {
        let arc = Arc::new(snapshot);
        self.snapshots
            .insert(arc.branch.id.clone(), arc.clone());
        arc
    }

    pub fn invalidate(&self, branch_id: &str) {
        if self.snapshots.remove(branch_id).is_some() {
            metrics::counter!(crate::observability::SNAPSHOT_INVALIDATIONS_TOTAL).increment(1);
        }
    }

    pub fn invalidate_all(&self) {
        let n = self.snapshots.len();
        self.snapshots.clear();
        metrics::counter!(crate::observability::SNAPSHOT_INVALIDATIONS_TOTAL)
            .increment(n as u64);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
