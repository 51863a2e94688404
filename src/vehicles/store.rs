//! Vehicle Storage
//! Mission: Manage the in-memory vehicle collection behind one write boundary

use crate::vehicles::models::{Vehicle, VehicleDraft};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::info;

struct VehiclesInner {
    records: BTreeMap<u32, Vehicle>,
    next_id: u32,
}

/// In-memory vehicle collection.
///
/// Keyed by identifier so updates replace in place and listing order is
/// deterministic. All data is lost on restart. Concurrent writers are
/// serialized by the `RwLock`; identifier assignment is monotonic and
/// never reuses an id, even after deletion.
pub struct VehicleStore {
    inner: RwLock<VehiclesInner>,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(VehiclesInner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// List all vehicles, ordered by identifier
    pub fn list(&self) -> Vec<Vehicle> {
        self.inner.read().records.values().cloned().collect()
    }

    /// Create a vehicle with the next free identifier
    pub fn create(&self, draft: VehicleDraft) -> Vehicle {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let vehicle = Vehicle {
            id,
            make: draft.make,
            model: draft.model,
            year: draft.year,
        };
        inner.records.insert(id, vehicle.clone());

        info!("🚗 Vehicle created: #{} {} {}", id, vehicle.make, vehicle.model);

        vehicle
    }

    /// Replace a vehicle wholesale, keeping its identifier.
    ///
    /// Returns `None` when no vehicle has the given id.
    pub fn update(&self, id: u32, draft: VehicleDraft) -> Option<Vehicle> {
        let mut inner = self.inner.write();
        if !inner.records.contains_key(&id) {
            return None;
        }

        let vehicle = Vehicle {
            id,
            make: draft.make,
            model: draft.model,
            year: draft.year,
        };
        inner.records.insert(id, vehicle.clone());

        Some(vehicle)
    }

    /// Remove a vehicle. Returns false when the id is unknown.
    pub fn remove(&self, id: u32) -> bool {
        let removed = self.inner.write().records.remove(&id).is_some();
        if removed {
            info!("🗑️  Vehicle deleted: #{}", id);
        }
        removed
    }
}

impl Default for VehicleStore {
    fn default() -> Self {
        Self::new()
    }
}
