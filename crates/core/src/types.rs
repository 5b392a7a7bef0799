//! Data model for inventory records
//!
//! This module defines the types flowing between the store and the
//! concurrency strategies:
//! - [`ItemId`]: identifier for one inventory record
//! - [`StockRecord`]: the versioned counter under contention
//! - [`Strategy`]: which concurrency-control strategy produced a result

use serde::{Deserialize, Serialize};

/// Unique identifier for an inventory record.
///
/// Ids are allocated sequentially by the store, starting at 1.
///
/// # Examples
///
/// ```
/// use stockbench_core::types::ItemId;
///
/// let id = ItemId::new(1);
/// assert_eq!(id.get(), 1);
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw id.
    pub fn new(raw: u64) -> Self {
        ItemId(raw)
    }

    /// Get the raw id value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One inventory record: a named quantity with a version stamp.
///
/// The quantity is unsigned, so it can never be observed negative; both
/// decrement paths use `checked_sub` before writing. The version stamp
/// increases by exactly 1 on every committed write and is what the
/// optimistic path uses to detect that the record changed since it was
/// last read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Record identifier.
    pub id: ItemId,
    /// Human-readable label, fixed at creation.
    pub name: String,
    /// Remaining stock.
    pub quantity: u32,
    /// Monotonically increasing write stamp, 0 at creation.
    pub version: u64,
}

impl StockRecord {
    /// Create a fresh record at version 0.
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        StockRecord {
            id,
            name: name.into(),
            quantity,
            version: 0,
        }
    }
}

/// Concurrency-control strategy label.
///
/// Attached to benchmark results so a comparison can name its winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Version-stamped read-check-write with retry on conflict.
    Optimistic,
    /// Exclusive per-record critical section.
    Pessimistic,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Optimistic => write!(f, "optimistic"),
            Strategy::Pessimistic => write!(f, "pessimistic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_roundtrip() {
        let id = ItemId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_item_id_ordering() {
        assert!(ItemId::new(1) < ItemId::new(2));
        assert_eq!(ItemId::new(7), ItemId::new(7));
    }

    #[test]
    fn test_record_starts_at_version_zero() {
        let record = StockRecord::new(ItemId::new(1), "widget", 100);
        assert_eq!(record.quantity, 100);
        assert_eq!(record.version, 0);
        assert_eq!(record.name, "widget");
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Optimistic.to_string(), "optimistic");
        assert_eq!(Strategy::Pessimistic.to_string(), "pessimistic");
    }
}
