//! Domain model for resale inventory items.

pub mod item;

pub use item::{parse_price, sold_signal_conflicts, ItemRecord, SoldSignalConflict};
