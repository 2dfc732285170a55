use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GrocerError, Result};
use crate::fmt::{days, quantity};
use crate::models::{normalize_name, BillLine, Item};
use crate::notifications::NotificationLog;
use crate::persistence::{self, LoadFailure};
use crate::rules::{date_after, expiry_status, suggest_alternatives, ExpiryStatus, Thresholds};

// Stock differences smaller than this are float noise from fractional sales.
const STOCK_EPSILON: f64 = 1e-9;

// (name, quantity, unit, unit_price, days until expiry from seeding)
const SEED_CATALOG: &[(&str, f64, &str, f64, u64)] = &[
    ("white sugar", 20.0, "kg", 350.0, 3),
    ("brown sugar", 5.0, "kg", 380.0, 15),
    ("white rice", 50.0, "kg", 220.0, 65),
    ("brown rice", 10.0, "kg", 260.0, 46),
    ("white bread", 12.0, "loaves", 150.0, 2),
    ("whole wheat bread", 8.0, "loaves", 180.0, 4),
    ("butter", 6.0, "packs", 550.0, 1),
    ("olive oil", 4.0, "bottles", 1200.0, 126),
    ("soda", 10.0, "bottles", 200.0, 10),
    ("sparkling water", 15.0, "bottles", 220.0, 37),
];

pub fn seed_catalog(today: NaiveDate) -> Result<Vec<Item>> {
    SEED_CATALOG
        .iter()
        .map(|(name, qty, unit, price, shelf)| {
            Ok(Item::new(name, *qty, unit, *price, date_after(today, *shelf)?))
        })
        .collect()
}

/// Parse a user-entered number, rejecting anything that is not a finite value.
pub fn parse_number(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GrocerError::Validation(format!("Invalid {field}: '{}'", raw.trim())))
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub catalog: Vec<Item>,
    #[serde(default)]
    pub bill: Vec<BillLine>,
}

impl StoreData {
    /// Re-apply the record invariants to data read back from disk.
    fn normalized(mut self) -> Self {
        for item in &mut self.catalog {
            item.name = normalize_name(&item.name);
            item.quantity = item.quantity.max(0.0);
        }
        for line in &mut self.bill {
            line.name = normalize_name(&line.name);
        }
        self
    }
}

/// Shop-counter configuration: a stocked catalog sold directly onto a bill.
pub struct Store {
    data: StoreData,
    path: Option<PathBuf>,
    limits: Thresholds,
    pub notifications: NotificationLog,
}

impl Store {
    #[allow(dead_code)]
    pub fn in_memory(catalog: Vec<Item>, limits: Thresholds) -> Self {
        Self {
            data: StoreData {
                catalog,
                bill: Vec::new(),
            },
            path: None,
            limits,
            notifications: NotificationLog::new(),
        }
    }

    /// Load the store file, seeding the catalog when it is absent or unusable.
    /// A seed made for a missing file is saved right away.
    pub fn open(path: &Path, today: NaiveDate, limits: Thresholds) -> Result<Self> {
        let (data, missing) = match persistence::try_load::<StoreData>(path) {
            Ok(data) => (data.normalized(), false),
            Err(failure) => {
                tracing::debug!(?failure, "seeding store catalog");
                let data = StoreData {
                    catalog: seed_catalog(today)?,
                    bill: Vec::new(),
                };
                (data, failure == LoadFailure::Missing)
            }
        };
        let mut store = Self {
            data,
            path: Some(path.to_path_buf()),
            limits,
            notifications: NotificationLog::new(),
        };
        if missing {
            store.persist();
        }
        Ok(store)
    }

    pub fn catalog(&self) -> &[Item] {
        &self.data.catalog
    }

    pub fn bill(&self) -> &[BillLine] {
        &self.data.bill
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        let name = normalize_name(name);
        self.data.catalog.iter().find(|i| i.name == name)
    }

    pub fn bill_total(&self) -> f64 {
        self.data.bill.iter().map(|l| l.total).sum()
    }

    /// Sell `quantity` of `name` at `price`. The only path that reduces stock.
    pub fn add_to_bill(&mut self, name: &str, quantity_raw: &str, price_raw: &str) -> Result<BillLine> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(GrocerError::Validation("Item name is required".to_string()));
        }
        let qty = parse_number("quantity", quantity_raw)?;
        let price = parse_number("price", price_raw)?;
        if qty <= 0.0 {
            return Err(GrocerError::Validation(format!(
                "Quantity must be positive, got {}",
                quantity(qty)
            )));
        }
        if price < 0.0 {
            return Err(GrocerError::Validation(format!("Price cannot be negative, got {price}")));
        }

        let idx = self
            .data
            .catalog
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| GrocerError::Validation(format!("Unknown item: '{name}'")))?;

        let available = self.data.catalog[idx].quantity;
        if qty - available > STOCK_EPSILON {
            self.notifications
                .warning(format!("Insufficient stock for '{name}'"));
            for alt in suggest_alternatives(&name, &self.data.catalog) {
                self.notifications
                    .suggestion(format!("Suggested alternative: {alt}"));
            }
            return Err(GrocerError::Stock {
                name,
                requested: qty,
                available,
            });
        }

        let item = &mut self.data.catalog[idx];
        let remaining = item.quantity - qty;
        item.quantity = if remaining < STOCK_EPSILON { 0.0 } else { remaining };
        let unit = item.unit.clone();
        let line = BillLine::new(&name, qty, price);
        self.data.bill.push(line.clone());
        tracing::debug!(item = %name, qty, price, "added to bill");
        self.notifications
            .success(format!("Added {} {unit} of '{name}' to bill", quantity(qty)));
        self.persist();
        Ok(line)
    }

    /// Warn about catalog items close to or past expiry. Returns the warning count.
    pub fn check_expiry(&mut self, today: NaiveDate) -> usize {
        let mut warnings = Vec::new();
        for item in &self.data.catalog {
            match expiry_status(today, item.expiry, self.limits.expiry_warning_days) {
                ExpiryStatus::Fresh => {}
                ExpiryStatus::ExpiresSoon(d) => {
                    warnings.push(format!("'{}' expires {}!", item.name, days(d)));
                }
                ExpiryStatus::Expired(d) => {
                    warnings.push(format!("'{}' expired {}", item.name, days(d)));
                }
            }
        }
        let count = warnings.len();
        for w in warnings {
            self.notifications.warning(w);
        }
        count
    }

    pub fn clear_bill(&mut self) -> f64 {
        let total = self.bill_total();
        let lines = self.data.bill.len();
        self.data.bill.clear();
        self.notifications
            .info(format!("Bill cleared ({lines} line(s))"));
        self.persist();
        total
    }

    pub fn reset_catalog(&mut self, today: NaiveDate) -> Result<()> {
        self.data.catalog = seed_catalog(today)?;
        self.data.bill.clear();
        self.notifications.info("Catalog restored to the default stock");
        self.persist();
        Ok(())
    }

    fn persist(&mut self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = persistence::save(path, &self.data) {
            tracing::warn!(error = %e, "store not saved");
            self.notifications.warning(format!("Could not save store: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn test_store() -> Store {
        Store::in_memory(seed_catalog(date("2025-12-26")).unwrap(), Thresholds::default())
    }

    fn stock(store: &Store, name: &str) -> f64 {
        store.item(name).unwrap().quantity
    }

    #[test]
    fn test_sell_olive_oil() {
        let mut store = test_store();
        let line = store.add_to_bill("olive oil", "2", "1200").unwrap();
        assert_eq!(line.total, 2400.0);
        assert_eq!(stock(&store, "olive oil"), 2.0);
        assert_eq!(store.bill().len(), 1);
        let last = store.notifications.messages().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.text, "Added 2 bottles of 'olive oil' to bill");
    }

    #[test]
    fn test_insufficient_stock_suggests_alternative() {
        let mut store = test_store();
        let err = store.add_to_bill("olive oil", "10", "1200").unwrap_err();
        assert!(matches!(err, GrocerError::Stock { available, .. } if available == 4.0));
        assert_eq!(stock(&store, "olive oil"), 4.0);
        assert!(store.bill().is_empty());
        let suggestions: Vec<_> = store
            .notifications
            .of_kind(NotificationKind::Suggestion)
            .map(|n| n.text.clone())
            .collect();
        assert_eq!(suggestions, vec!["Suggested alternative: butter"]);
    }

    #[test]
    fn test_insufficient_stock_without_alternative_in_stock() {
        let mut store = test_store();
        store.add_to_bill("butter", "6", "550").unwrap();
        let err = store.add_to_bill("olive oil", "5", "1200").unwrap_err();
        assert!(matches!(err, GrocerError::Stock { .. }));
        assert_eq!(store.notifications.of_kind(NotificationKind::Suggestion).count(), 0);
        assert_eq!(store.notifications.of_kind(NotificationKind::Warning).count(), 1);
    }

    #[test]
    fn test_selling_entire_stock_leaves_zero() {
        let mut store = test_store();
        store.add_to_bill("brown sugar", "5", "380").unwrap();
        assert_eq!(stock(&store, "brown sugar"), 0.0);
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let mut store = test_store();
        for (qty, price) in [("two", "1200"), ("2", "lots"), ("", "1"), ("0", "1"), ("2", "-5"), ("NaN", "1")] {
            let err = store.add_to_bill("olive oil", qty, price).unwrap_err();
            assert!(matches!(err, GrocerError::Validation(_)), "{qty}/{price}");
        }
        assert_eq!(stock(&store, "olive oil"), 4.0);
        assert!(store.notifications.is_empty());
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut store = test_store();
        let err = store.add_to_bill("caviar", "1", "100").unwrap_err();
        assert!(matches!(err, GrocerError::Validation(_)));
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let mut store = test_store();
        store.add_to_bill("Olive Oil", "1", "1200").unwrap();
        assert_eq!(stock(&store, "olive oil"), 3.0);
    }

    #[test]
    fn test_bill_total_and_clear() {
        let mut store = test_store();
        store.add_to_bill("olive oil", "2", "1200").unwrap();
        store.add_to_bill("soda", "3", "200").unwrap();
        assert_eq!(store.bill_total(), 3000.0);
        assert_eq!(store.clear_bill(), 3000.0);
        assert!(store.bill().is_empty());
        assert_eq!(stock(&store, "soda"), 7.0);
    }

    #[test]
    fn test_expiry_warnings_on_seed_catalog() {
        let mut store = test_store();
        // butter +1, white bread +2, white sugar +3 are inside the window; whole wheat +4 is not
        let count = store.check_expiry(date("2025-12-26"));
        assert_eq!(count, 3);
        let texts: Vec<_> = store.notifications.messages().iter().map(|n| n.text.clone()).collect();
        assert!(texts.contains(&"'butter' expires in 1 day!".to_string()));
        assert!(texts.contains(&"'white sugar' expires in 3 days!".to_string()));
    }

    #[test]
    fn test_expired_catalog_items_warn_but_stay() {
        let mut store = test_store();
        store.check_expiry(date("2025-12-30"));
        let texts: Vec<_> = store.notifications.messages().iter().map(|n| n.text.clone()).collect();
        assert!(texts.contains(&"'butter' expired 3 days ago".to_string()));
        assert_eq!(store.catalog().len(), 10);
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut store = test_store();
        store.add_to_bill("olive oil", "4", "1200").unwrap();
        store.reset_catalog(date("2025-12-26")).unwrap();
        assert_eq!(stock(&store, "olive oil"), 4.0);
        assert!(store.bill().is_empty());
    }

    #[test]
    fn test_open_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let today = date("2025-12-26");
        {
            let mut store = Store::open(&path, today, Thresholds::default()).unwrap();
            store.add_to_bill("olive oil", "1", "1200").unwrap();
        }
        let store = Store::open(&path, today, Thresholds::default()).unwrap();
        assert_eq!(stock(&store, "olive oil"), 3.0);
        assert_eq!(store.bill().len(), 1);
    }

    #[test]
    fn test_open_malformed_file_seeds_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "garbage").unwrap();
        let store = Store::open(&path, date("2025-12-26"), Thresholds::default()).unwrap();
        assert_eq!(store.catalog().len(), 10);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage");
    }

    #[test]
    fn test_sell_exact_fractional_remainder() {
        let catalog = vec![Item::new("white rice", 0.3, "kg", 220.0, date("2026-03-01"))];
        let mut store = Store::in_memory(catalog, Thresholds::default());
        store.add_to_bill("white rice", "0.1", "220").unwrap();
        store.add_to_bill("white rice", "0.2", "220").unwrap();
        assert_eq!(stock(&store, "white rice"), 0.0);
        assert_eq!(store.bill().len(), 2);

        let err = store.add_to_bill("white rice", "0.001", "220").unwrap_err();
        assert!(matches!(err, GrocerError::Stock { .. }));
    }

    #[test]
    fn test_open_normalizes_loaded_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(
            &path,
            r#"{"catalog":[
                {"name":" Olive Oil","quantity":-3,"unit":"bottles","unit_price":1200,"expiry":"2026-05-01"},
                {"name":"BUTTER","quantity":2,"unit":"packs","unit_price":550,"expiry":"2026-01-10"}
            ],"bill":[]}"#,
        )
        .unwrap();
        let mut store = Store::open(&path, date("2025-12-26"), Thresholds::default()).unwrap();
        assert_eq!(stock(&store, "olive oil"), 0.0);
        assert_eq!(store.catalog()[0].name, "olive oil");

        let err = store.add_to_bill("olive oil", "1", "1200").unwrap_err();
        assert!(matches!(err, GrocerError::Stock { .. }));
        store.add_to_bill("butter", "1", "550").unwrap();
        assert_eq!(stock(&store, "butter"), 1.0);
    }

    #[test]
    fn test_missing_file_seed_is_saved_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let first = Store::open(&path, date("2025-12-26"), Thresholds::default()).unwrap();
        assert!(path.exists());

        let later = Store::open(&path, date("2026-01-02"), Thresholds::default()).unwrap();
        assert_eq!(later.item("butter").unwrap().expiry, first.item("butter").unwrap().expiry);
        assert_eq!(later.item("butter").unwrap().expiry, date("2025-12-27"));
    }

    #[test]
    fn test_seed_out_of_date_range() {
        assert!(matches!(
            seed_catalog(NaiveDate::MAX),
            Err(GrocerError::Validation(_))
        ));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        assert!(Store::open(&path, NaiveDate::MAX, Thresholds::default()).is_err());
        assert!(!path.exists());
        assert_eq!(store.catalog().len(), 10);
    }
}
