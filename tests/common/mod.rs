use chrono::{DateTime, TimeZone, Utc};
use resale_core::ItemRecord;

/// Builds a UTC instant at noon for readable test dates.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn unsold(name: &str, purchase: f64, added: DateTime<Utc>) -> ItemRecord {
    ItemRecord::new(name, purchase, added)
}

pub fn sold(
    name: &str,
    purchase: f64,
    added: DateTime<Utc>,
    sale: f64,
    sold_at: DateTime<Utc>,
) -> ItemRecord {
    let mut item = ItemRecord::new(name, purchase, added);
    item.mark_sold(sold_at, sale, Some("eBay".into()));
    item
}

/// The two-item scenario exercised across the suites: one unsold January
/// purchase and one January purchase sold in February.
pub fn january_snapshot() -> Vec<ItemRecord> {
    vec![
        unsold("Dunk Low", 100.0, at(2024, 1, 15)),
        sold("Band Tee", 50.0, at(2024, 1, 20), 80.0, at(2024, 2, 10)),
    ]
}
