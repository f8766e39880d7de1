//! Pure analytics over an immutable item snapshot: running totals,
//! sold/unsold filtering, monthly buckets, and time-to-sell distributions.

pub mod aggregator;
pub mod time_to_sell;

pub use aggregator::{compute_totals, filter_items, monthly_stats, MonthBucket, Totals};
pub use time_to_sell::{average_days, time_to_sell, TimeToSellPoint};
