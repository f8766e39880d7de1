//! Spreadsheet-compatible CSV rendering of item records.
//!
//! A pure in-memory transform: header row plus one row per record, input order
//! preserved, no trailing newline. Callers wanting a filtered export apply the
//! aggregator filter first; writing the text anywhere is the job of
//! [`crate::utils::persistence`].

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::ItemRecord;

/// Fixed export column order.
pub const CSV_COLUMNS: [&str; 12] = [
    "id",
    "name",
    "brand",
    "category",
    "purchasePrice",
    "salePrice",
    "addedAt",
    "soldAt",
    "marketplace",
    "isSold",
    "hasPurchaseReceipt",
    "hasSaleReceipt",
];

/// Renders the collection as delimited text, one line per record after the
/// header. Never fails on well-formed records.
pub fn to_delimited_text(items: &[ItemRecord]) -> String {
    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(CSV_COLUMNS.join(","));
    for item in items {
        rows.push(render_row(item));
    }
    tracing::debug!(rows = items.len(), "rendered CSV export");
    rows.join("\n")
}

fn render_row(item: &ItemRecord) -> String {
    [
        field(&item.id.to_string()),
        field(&item.name),
        field(item.brand.as_deref().unwrap_or_default()),
        field(item.category.as_deref().unwrap_or_default()),
        number(item.purchase_price),
        number(item.sale_price),
        instant(Some(item.added_at)),
        instant(item.sold_at),
        field(item.marketplace.as_deref().unwrap_or_default()),
        boolean(item.sold()),
        boolean(item.has_purchase_receipt),
        boolean(item.has_sale_receipt),
    ]
    .join(",")
}

/// Quotes a field only when it embeds a delimiter, quote, or line break;
/// internal quotes are doubled.
fn field(value: &str) -> String {
    let needs_quoting = value.contains([',', '"', '\r', '\n']);
    if needs_quoting {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Two fractional digits with a fixed decimal point; bare `0` for zero.
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Lowercase `true`/`false`, matching the JSON export convention.
fn boolean(value: bool) -> String {
    value.to_string()
}

/// RFC 3339 with millisecond precision and an explicit `Z` offset; empty when
/// absent. Sortable as plain text.
fn instant(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
