//! Serialization of item collections into portable export artifacts.

pub mod csv;

pub use csv::{to_delimited_text, CSV_COLUMNS};
