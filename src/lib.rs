#![doc(test(attr(deny(warnings))))]

//! Resale Core is the ledger analytics and export engine behind a resale
//! inventory tracker: monthly spend/revenue/profit buckets, time-to-sell
//! distributions, sold/unsold filtering, and a spreadsheet-compatible CSV
//! export of the item collection.
//!
//! Every computation is a pure function of an immutable item snapshot plus
//! explicit parameters. The engine holds no state and no listeners, and
//! performs no I/O apart from the export-write helper in [`utils::persistence`].

pub mod analytics;
pub mod domain;
pub mod errors;
pub mod export;
pub mod utils;

pub use analytics::{
    average_days, compute_totals, filter_items, monthly_stats, time_to_sell, MonthBucket,
    TimeToSellPoint, Totals,
};
pub use domain::{parse_price, sold_signal_conflicts, ItemRecord, SoldSignalConflict};
pub use errors::LedgerError;
pub use export::to_delimited_text;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Resale Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
