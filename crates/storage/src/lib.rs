//! In-memory store for stockbench
//!
//! This crate implements the [`InventoryStore`](stockbench_core::InventoryStore)
//! contract with:
//! - MemoryStore: DashMap of per-record lock cells
//! - ExclusiveLease: RAII exclusive section over one record
//! - Atomic id allocation with AtomicU64

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::{ExclusiveLease, MemoryStore};
