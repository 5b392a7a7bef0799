//! Concurrent in-memory inventory store
//!
//! Layout: DashMap from [`ItemId`] to a per-record lock cell
//! (`Arc<RwLock<StockRecord>>`).
//!
//! - read(): takes the cell's read lock briefly and clones
//! - write_versioned(): takes the write lock only for the
//!   check-and-increment, so the version compare is atomic against every
//!   other writer of the same id
//! - acquire_exclusive(): holds the write lock for the whole critical
//!   section via an owned guard, released on drop
//!
//! Records for different ids live in different cells and never contend.

use dashmap::DashMap;
use parking_lot::{ArcRwLockWriteGuard, RawRwLock, RwLock};
use stockbench_core::error::{Error, Result};
use stockbench_core::traits::{InventoryStore, StockLease};
use stockbench_core::types::{ItemId, StockRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Held exclusive section over one record.
///
/// Owns the record's write lock; dropping the lease releases it before the
/// next waiter is granted. Writes through the lease bump the version stamp
/// the same way versioned writes do, keeping the stamp monotonic.
pub struct ExclusiveLease {
    guard: ArcRwLockWriteGuard<RawRwLock, StockRecord>,
}

impl StockLease for ExclusiveLease {
    fn record(&self) -> &StockRecord {
        &self.guard
    }

    fn write(&mut self, quantity: u32) {
        self.guard.quantity = quantity;
        self.guard.version += 1;
    }
}

impl std::fmt::Debug for ExclusiveLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusiveLease")
            .field("id", &self.guard.id)
            .field("version", &self.guard.version)
            .finish()
    }
}

/// Concurrent in-memory inventory store.
///
/// # Thread Safety
///
/// All operations are safe from any number of threads:
/// - read(): read lock on the target cell only
/// - write_versioned(): write lock on the target cell only, held for the
///   check-and-increment
/// - acquire_exclusive(): write lock on the target cell, held until the
///   lease drops
///
/// # Example
///
/// ```
/// use stockbench_storage::MemoryStore;
/// use stockbench_core::InventoryStore;
///
/// let store = MemoryStore::new();
/// let record = store.create("widget", 100);
/// assert_eq!(store.read(record.id).unwrap().quantity, 100);
/// ```
pub struct MemoryStore {
    /// Per-record lock cells.
    cells: DashMap<ItemId, Arc<RwLock<StockRecord>>>,
    /// Next id to allocate.
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore {
            cells: DashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Create a fresh record with the given initial quantity, version 0.
    ///
    /// Ids are allocated sequentially starting at 1.
    pub fn create(&self, name: &str, initial_quantity: u32) -> StockRecord {
        let id = ItemId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let record = StockRecord::new(id, name, initial_quantity);
        self.cells.insert(id, Arc::new(RwLock::new(record.clone())));
        tracing::debug!(%id, name, initial_quantity, "record created");
        record
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether a record exists.
    pub fn contains(&self, id: ItemId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Look up a record's lock cell.
    fn cell(&self, id: ItemId) -> Result<Arc<RwLock<StockRecord>>> {
        self.cells
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(Error::NotFound(id))
    }
}

impl InventoryStore for MemoryStore {
    type Lease = ExclusiveLease;

    #[inline]
    fn read(&self, id: ItemId) -> Result<StockRecord> {
        let cell = self.cell(id)?;
        let record = cell.read().clone();
        Ok(record)
    }

    fn write_versioned(&self, id: ItemId, quantity: u32, expected_version: u64) -> Result<u64> {
        let cell = self.cell(id)?;
        let mut record = cell.write();
        if record.version != expected_version {
            return Err(Error::VersionConflict {
                expected: expected_version,
                actual: record.version,
            });
        }
        record.quantity = quantity;
        record.version += 1;
        Ok(record.version)
    }

    fn acquire_exclusive(&self, id: ItemId) -> Result<Self::Lease> {
        let cell = self.cell(id)?;
        Ok(ExclusiveLease {
            guard: cell.write_arc(),
        })
    }

    fn try_acquire_exclusive(&self, id: ItemId, timeout: Duration) -> Result<Self::Lease> {
        let cell = self.cell(id)?;
        match cell.try_write_arc_for(timeout) {
            Some(guard) => Ok(ExclusiveLease { guard }),
            None => Err(Error::LockTimeout(timeout)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("records", &self.len())
            .finish()
    }
}
