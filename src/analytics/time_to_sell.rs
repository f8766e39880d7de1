//! Holding-duration statistics for sold items.

use chrono::{DateTime, Utc};

use crate::domain::ItemRecord;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One sold item's holding duration, keyed by its sale instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeToSellPoint {
    pub sold_at: DateTime<Utc>,
    pub days: f64,
}

/// Computes the holding duration for every item with a recorded sale instant,
/// ascending by sale date. Durations are clamped to zero when `added_at` lies
/// after `sold_at`; items without a `sold_at` are excluded, never zero-filled.
pub fn time_to_sell(items: &[ItemRecord]) -> Vec<TimeToSellPoint> {
    let mut points: Vec<TimeToSellPoint> = items
        .iter()
        .filter_map(|item| {
            let sold_at = item.sold_at?;
            let seconds = (sold_at - item.added_at).num_milliseconds() as f64 / 1_000.0;
            Some(TimeToSellPoint {
                sold_at,
                days: (seconds / SECONDS_PER_DAY).max(0.0),
            })
        })
        .collect();
    points.sort_by_key(|point| point.sold_at);
    points
}

/// Arithmetic mean of the holding durations; `None` for an empty sequence so
/// callers render an explicit "no data" state instead of a fake zero.
pub fn average_days(points: &[TimeToSellPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let total: f64 = points.iter().map(|point| point.days).sum();
    Some(total / points.len() as f64)
}
