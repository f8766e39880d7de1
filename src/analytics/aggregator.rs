//! Ledger aggregation: collection-wide totals, query filtering, and monthly
//! spend/revenue/profit buckets.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::domain::ItemRecord;

/// Collection-wide money summary. Always reflects the full snapshot,
/// independent of any filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub spent: f64,
    pub sales: f64,
    pub profit: f64,
}

/// Sums `purchase_price` over all items and `sale_price` over items with a
/// positive sale price; profit is sales minus spend.
pub fn compute_totals(items: &[ItemRecord]) -> Totals {
    let mut spent = 0.0;
    let mut sales = 0.0;
    for item in items {
        spent += item.purchase_price;
        if item.sale_price > 0.0 {
            sales += item.sale_price;
        }
    }
    Totals {
        spent,
        sales,
        profit: sales - spent,
    }
}

/// Applies text search plus the sold/unsold toggle, preserving input order.
///
/// An empty query matches everything; otherwise the query must appear
/// case-insensitively in the name, brand, or category. `sold_only=false`
/// keeps unsold records, `sold_only=true` keeps sold ones, so the two calls
/// partition the snapshot.
pub fn filter_items<'a>(
    items: &'a [ItemRecord],
    query: &str,
    sold_only: bool,
) -> Vec<&'a ItemRecord> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_query = needle.is_empty()
                || contains_ci(&item.name, &needle)
                || item
                    .brand
                    .as_deref()
                    .is_some_and(|brand| contains_ci(brand, &needle))
                || item
                    .category
                    .as_deref()
                    .is_some_and(|category| contains_ci(category, &needle));
            matches_query && item.sold() == sold_only
        })
        .collect()
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// One calendar month of ledger activity, keyed by the first day of the month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBucket {
    pub month_start: NaiveDate,
    /// Sum of purchase prices for items acquired in this month.
    pub spend: f64,
    /// Sum of sale prices for items sold in this month.
    pub revenue: f64,
}

impl MonthBucket {
    pub fn profit(&self) -> f64 {
        self.revenue - self.spend
    }
}

/// Buckets spend by acquisition month and revenue by sale month, ascending by
/// month start. Months with activity on only one side still appear, with the
/// other side zero.
///
/// `limit_to_last > 0` keeps only the most recent N buckets, dropping older
/// months outright; zero or negative means unlimited.
pub fn monthly_stats(items: &[ItemRecord], limit_to_last: i32) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    for item in items {
        let added_month = month_start(item.added_at);
        buckets.entry(added_month).or_default().0 += item.purchase_price;

        if let Some(sold) = item.sold_at {
            buckets.entry(month_start(sold)).or_default().1 += item.sale_price;
        }
    }

    let mut stats: Vec<MonthBucket> = buckets
        .into_iter()
        .map(|(month_start, (spend, revenue))| MonthBucket {
            month_start,
            spend,
            revenue,
        })
        .collect();

    if limit_to_last > 0 && stats.len() > limit_to_last as usize {
        stats.drain(..stats.len() - limit_to_last as usize);
    }
    tracing::debug!(buckets = stats.len(), "monthly stats computed");
    stats
}

fn month_start(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive().with_day(1).unwrap()
}
