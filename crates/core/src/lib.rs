//! Core types for stockbench
//!
//! This crate defines the fundamental pieces shared by every layer:
//! - [`ItemId`], [`StockRecord`], [`Strategy`]: the data model
//! - [`Error`], [`Result`]: the error taxonomy
//! - [`InventoryStore`], [`StockLease`]: the store contract both
//!   concurrency strategies are written against

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{InventoryStore, StockLease};
pub use types::{ItemId, StockRecord, Strategy};
