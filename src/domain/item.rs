//! Item records: one purchased resale item and its optional sale facts.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single physical resale item tracked from purchase to (optional) sale.
///
/// The schema is statically declared: optional facts are `Option` fields and
/// presence flags, never probed at runtime. Receipt fields are presence flags
/// only; image bytes live with the external record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub purchase_price: f64,
    /// 0 means "not sold".
    pub sale_price: f64,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
    pub is_sold: bool,
    #[serde(default)]
    pub has_purchase_receipt: bool,
    #[serde(default)]
    pub has_sale_receipt: bool,
}

impl ItemRecord {
    /// Creates a fresh unsold record acquired at `added_at`.
    pub fn new(name: impl Into<String>, purchase_price: f64, added_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: None,
            category: None,
            purchase_price: purchase_price.max(0.0),
            sale_price: 0.0,
            added_at,
            sold_at: None,
            marketplace: None,
            is_sold: false,
            has_purchase_receipt: false,
            has_sale_receipt: false,
        }
    }

    /// Records the sale facts, keeping all three sold signals in agreement.
    pub fn mark_sold(
        &mut self,
        sold_at: DateTime<Utc>,
        sale_price: f64,
        marketplace: Option<String>,
    ) {
        self.sold_at = Some(sold_at);
        self.sale_price = sale_price.max(0.0);
        self.marketplace = marketplace.filter(|m| !m.is_empty());
        self.is_sold = true;
    }

    /// Reverts the record to unsold, clearing every sale fact.
    pub fn mark_unsold(&mut self) {
        self.sold_at = None;
        self.sale_price = 0.0;
        self.marketplace = None;
        self.is_sold = false;
        self.has_sale_receipt = false;
    }

    /// The permissive sold predicate used everywhere in the engine: a record
    /// is sold when any of its three signals says so.
    pub fn sold(&self) -> bool {
        self.is_sold || self.sale_price > 0.0 || self.sold_at.is_some()
    }
}

/// Parses user-entered price text; anything that is not a valid non-negative
/// decimal is treated as 0 so invalid input never blocks a save or export.
pub fn parse_price(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}

/// A record whose three sold signals disagree with each other.
///
/// The engine never reconciles these; conflicts are surfaced for data-quality
/// diagnostics and the permissive predicate keeps treating the record as sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldSignalConflict {
    pub id: Uuid,
    pub name: String,
    pub is_sold_flag: bool,
    pub has_sale_price: bool,
    pub has_sold_at: bool,
}

impl fmt::Display for SoldSignalConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): isSold={}, salePrice>0={}, soldAt={}",
            self.name, self.id, self.is_sold_flag, self.has_sale_price, self.has_sold_at
        )
    }
}

/// Reports every record where the sold signals disagree, warning once per
/// conflict. Records with all three signals false (plain unsold) or all three
/// true are consistent and skipped.
pub fn sold_signal_conflicts(items: &[ItemRecord]) -> Vec<SoldSignalConflict> {
    let mut conflicts = Vec::new();
    for item in items {
        let signals = [
            item.is_sold,
            item.sale_price > 0.0,
            item.sold_at.is_some(),
        ];
        if signals.iter().any(|&s| s) && !signals.iter().all(|&s| s) {
            let conflict = SoldSignalConflict {
                id: item.id,
                name: item.name.clone(),
                is_sold_flag: signals[0],
                has_sale_price: signals[1],
                has_sold_at: signals[2],
            };
            tracing::warn!("sold signals disagree for {conflict}");
            conflicts.push(conflict);
        }
    }
    conflicts
}
