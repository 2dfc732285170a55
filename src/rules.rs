use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::error::{GrocerError, Result};
use crate::models::{normalize_name, GroceryListEntry, Item, PurchaseHistoryRecord};

/// Groups of mutually substitutable items, searched in declaration order.
pub const ALTERNATIVE_GROUPS: &[(&str, &[&str])] = &[
    ("sugar", &["white sugar", "brown sugar"]),
    ("rice", &["white rice", "brown rice"]),
    ("bread", &["white bread", "whole wheat bread"]),
    ("fat", &["butter", "olive oil"]),
    ("drink", &["soda", "sparkling water"]),
];

/// One-to-one healthier swaps offered when an item lands on the grocery list.
pub const HEALTHIER_SUBSTITUTES: &[(&str, &str)] = &[
    ("white bread", "whole wheat bread"),
    ("white rice", "brown rice"),
    ("white sugar", "brown sugar"),
    ("soda", "sparkling water"),
    ("butter", "olive oil"),
    ("potato chips", "unsalted nuts"),
    ("whole milk", "low-fat milk"),
];

// (name, days)
const SHELF_LIFE: &[(&str, i64)] = &[
    ("milk", 7),
    ("whole milk", 7),
    ("low-fat milk", 7),
    ("bread", 5),
    ("white bread", 5),
    ("whole wheat bread", 5),
    ("eggs", 21),
    ("butter", 30),
    ("cheese", 21),
    ("yogurt", 14),
    ("chicken", 3),
    ("fish", 2),
    ("spinach", 5),
    ("bananas", 5),
    ("apples", 30),
    ("rice", 365),
    ("white rice", 365),
    ("brown rice", 180),
    ("sugar", 730),
];

/// Tunable limits for the rules below. Defaults match the shipped settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub expiry_warning_days: i64,
    pub default_shelf_life_days: i64,
    pub repeat_window_days: i64,
    pub repeat_min_count: usize,
    pub repeat_min_gap_days: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            expiry_warning_days: 3,
            default_shelf_life_days: 7,
            repeat_window_days: 30,
            repeat_min_count: 2,
            repeat_min_gap_days: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Fresh,
    ExpiresSoon(i64),
    Expired(i64),
}

pub fn days_left(today: NaiveDate, expiry: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// `start` moved forward by `days`, or a validation error past the calendar's range.
pub fn date_after(start: NaiveDate, days: u64) -> Result<NaiveDate> {
    start.checked_add_days(Days::new(days)).ok_or_else(|| {
        GrocerError::Validation(format!("Date out of range: {start} plus {days} days"))
    })
}

pub fn expiry_status(today: NaiveDate, expiry: NaiveDate, warn_days: i64) -> ExpiryStatus {
    let days = days_left(today, expiry);
    if days < 0 {
        ExpiryStatus::Expired(days)
    } else if days <= warn_days {
        ExpiryStatus::ExpiresSoon(days)
    } else {
        ExpiryStatus::Fresh
    }
}

/// Purchased items are dropped from inventory once more than a day past expiry.
pub fn should_purge(days_left: i64) -> bool {
    days_left < -1
}

/// In-stock members of every group containing `name`, excluding `name` itself.
pub fn suggest_alternatives(name: &str, catalog: &[Item]) -> Vec<String> {
    let name = normalize_name(name);
    let mut found: Vec<String> = Vec::new();
    for (_, members) in ALTERNATIVE_GROUPS {
        if !members.contains(&name.as_str()) {
            continue;
        }
        for alt in members.iter().filter(|m| **m != name) {
            let in_stock = catalog.iter().any(|i| i.name == *alt && i.quantity > 0.0);
            if in_stock && !found.iter().any(|f| f == alt) {
                found.push(alt.to_string());
            }
        }
    }
    found
}

pub fn healthier_substitute(name: &str) -> Option<&'static str> {
    let name = normalize_name(name);
    HEALTHIER_SUBSTITUTES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}

pub fn shelf_life_days(name: &str, default_days: i64) -> i64 {
    let name = normalize_name(name);
    SHELF_LIFE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
        .unwrap_or(default_days)
}

/// Items bought often enough in the recent window, not already pending, and
/// not bought too recently. Returned in name order.
pub fn repeat_purchase_suggestions(
    history: &[PurchaseHistoryRecord],
    pending: &[GroceryListEntry],
    today: NaiveDate,
    limits: &Thresholds,
) -> Vec<String> {
    let mut frequency: BTreeMap<&str, (usize, NaiveDate)> = BTreeMap::new();
    for record in history {
        let age = (today - record.purchase_date).num_days();
        if !(0..=limits.repeat_window_days).contains(&age) {
            continue;
        }
        let entry = frequency
            .entry(record.name.as_str())
            .or_insert((0, record.purchase_date));
        entry.0 += 1;
        if record.purchase_date > entry.1 {
            entry.1 = record.purchase_date;
        }
    }

    frequency
        .into_iter()
        .filter(|(name, (count, last))| {
            *count >= limits.repeat_min_count
                && !pending.iter().any(|p| p.name == *name)
                && (today - *last).num_days() >= limits.repeat_min_gap_days
        })
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn item(name: &str, qty: f64) -> Item {
        Item::new(name, qty, "units", 100.0, date("2026-06-01"))
    }

    fn bought(name: &str, on: NaiveDate) -> PurchaseHistoryRecord {
        PurchaseHistoryRecord {
            name: name.to_string(),
            purchase_date: on,
        }
    }

    #[test]
    fn test_expiry_status_boundaries() {
        let today = date("2026-01-10");
        assert_eq!(expiry_status(today, date("2026-01-14"), 3), ExpiryStatus::Fresh);
        assert_eq!(expiry_status(today, date("2026-01-13"), 3), ExpiryStatus::ExpiresSoon(3));
        assert_eq!(expiry_status(today, date("2026-01-10"), 3), ExpiryStatus::ExpiresSoon(0));
        assert_eq!(expiry_status(today, date("2026-01-09"), 3), ExpiryStatus::Expired(-1));
    }

    #[test]
    fn test_date_after_range() {
        assert_eq!(date_after(date("2026-01-01"), 7).unwrap(), date("2026-01-08"));
        assert!(matches!(
            date_after(NaiveDate::MAX, 1),
            Err(GrocerError::Validation(_))
        ));
        assert!(date_after(date("2026-01-01"), u64::MAX).is_err());
    }

    #[test]
    fn test_purge_threshold() {
        assert!(!should_purge(0));
        assert!(!should_purge(-1));
        assert!(should_purge(-2));
    }

    #[test]
    fn test_alternative_in_same_group() {
        let catalog = vec![item("butter", 6.0), item("olive oil", 4.0)];
        assert_eq!(suggest_alternatives("olive oil", &catalog), vec!["butter"]);
    }

    #[test]
    fn test_alternative_skipped_when_out_of_stock() {
        let catalog = vec![item("butter", 0.0), item("olive oil", 4.0)];
        assert!(suggest_alternatives("olive oil", &catalog).is_empty());
    }

    #[test]
    fn test_alternative_for_ungrouped_item() {
        let catalog = vec![item("eggs", 12.0), item("butter", 6.0)];
        assert!(suggest_alternatives("eggs", &catalog).is_empty());
    }

    #[test]
    fn test_healthier_substitute_lookup() {
        assert_eq!(healthier_substitute("White Bread"), Some("whole wheat bread"));
        assert_eq!(healthier_substitute("soda"), Some("sparkling water"));
        assert_eq!(healthier_substitute("eggs"), None);
    }

    #[test]
    fn test_shelf_life_defaults_for_unknown() {
        assert_eq!(shelf_life_days("milk", 7), 7);
        assert_eq!(shelf_life_days("eggs", 7), 21);
        assert_eq!(shelf_life_days("dragon fruit", 7), 7);
        assert_eq!(shelf_life_days("dragon fruit", 10), 10);
    }

    #[test]
    fn test_repeat_purchase_after_gap() {
        let day0 = date("2026-02-01");
        let history = vec![bought("milk", day0), bought("milk", day0 + chrono::Days::new(10))];
        let limits = Thresholds::default();

        let on_day16 = repeat_purchase_suggestions(&history, &[], day0 + chrono::Days::new(16), &limits);
        assert_eq!(on_day16, vec!["milk"]);

        let on_day13 = repeat_purchase_suggestions(&history, &[], day0 + chrono::Days::new(13), &limits);
        assert!(on_day13.is_empty());
    }

    #[test]
    fn test_repeat_purchase_skips_pending() {
        let day0 = date("2026-02-01");
        let history = vec![bought("milk", day0), bought("milk", day0 + chrono::Days::new(10))];
        let pending = vec![GroceryListEntry {
            name: "milk".to_string(),
            quantity: String::new(),
        }];
        let out = repeat_purchase_suggestions(
            &history,
            &pending,
            day0 + chrono::Days::new(16),
            &Thresholds::default(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeat_purchase_ignores_old_history() {
        let day0 = date("2026-01-01");
        let history = vec![bought("eggs", day0), bought("eggs", day0 + chrono::Days::new(40))];
        let out = repeat_purchase_suggestions(
            &history,
            &[],
            day0 + chrono::Days::new(50),
            &Thresholds::default(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeat_purchase_in_name_order() {
        let day0 = date("2026-03-01");
        let history = vec![
            bought("yogurt", day0),
            bought("apples", day0),
            bought("yogurt", day0 + chrono::Days::new(2)),
            bought("apples", day0 + chrono::Days::new(3)),
        ];
        let out = repeat_purchase_suggestions(
            &history,
            &[],
            day0 + chrono::Days::new(12),
            &Thresholds::default(),
        );
        assert_eq!(out, vec!["apples", "yogurt"]);
    }
}
