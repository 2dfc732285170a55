use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Names are matched case-insensitively; stored names are always normalized.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A stocked catalog item available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
    pub expiry: NaiveDate,
}

impl Item {
    pub fn new(name: &str, quantity: f64, unit: &str, unit_price: f64, expiry: NaiveDate) -> Self {
        Self {
            name: normalize_name(name),
            quantity: quantity.max(0.0),
            unit: unit.to_string(),
            unit_price,
            expiry,
        }
    }

    pub fn stock_value(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryListEntry {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub name: String,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub days_left: i64,
}

impl InventoryEntry {
    pub fn refresh(&mut self, today: NaiveDate) {
        self.days_left = (self.expiry_date - today).num_days();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl BillLine {
    pub fn new(name: &str, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit_price,
            total: quantity * unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseHistoryRecord {
    pub name: String,
    pub purchase_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Suggestion,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Success => "success",
            NotificationKind::Suggestion => "suggestion",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub at: NaiveDateTime,
    pub kind: NotificationKind,
    pub text: String,
}
