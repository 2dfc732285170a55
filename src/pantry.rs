use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GrocerError, Result};
use crate::fmt::days;
use crate::models::{normalize_name, GroceryListEntry, InventoryEntry, PurchaseHistoryRecord};
use crate::notifications::NotificationLog;
use crate::persistence;
use crate::rules::{
    date_after, expiry_status, healthier_substitute, repeat_purchase_suggestions, shelf_life_days,
    should_purge, ExpiryStatus, Thresholds,
};

/// On-disk layout of the pantry file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PantryData {
    #[serde(default)]
    pub grocery_list: Vec<GroceryListEntry>,
    #[serde(default)]
    pub purchase_history: Vec<PurchaseHistoryRecord>,
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
}

impl PantryData {
    /// Re-apply the record invariants to data read back from disk: lowercase
    /// names and at most one pending entry per name.
    fn normalized(mut self) -> Self {
        let mut pending: Vec<GroceryListEntry> = Vec::with_capacity(self.grocery_list.len());
        for mut entry in self.grocery_list {
            entry.name = normalize_name(&entry.name);
            if !pending.iter().any(|p| p.name == entry.name) {
                pending.push(entry);
            }
        }
        self.grocery_list = pending;
        for record in &mut self.purchase_history {
            record.name = normalize_name(&record.name);
        }
        for entry in &mut self.inventory {
            entry.name = normalize_name(&entry.name);
        }
        self
    }
}

/// Household configuration: a pending shopping list, the purchased inventory
/// and an append-only purchase history, saved after every change.
pub struct Pantry {
    data: PantryData,
    path: Option<PathBuf>,
    limits: Thresholds,
    pub notifications: NotificationLog,
}

impl Pantry {
    #[allow(dead_code)]
    pub fn in_memory(limits: Thresholds) -> Self {
        Self {
            data: PantryData::default(),
            path: None,
            limits,
            notifications: NotificationLog::new(),
        }
    }

    pub fn open(path: &Path, limits: Thresholds) -> Self {
        Self {
            data: persistence::load_or_default::<PantryData>(path).normalized(),
            path: Some(path.to_path_buf()),
            limits,
            notifications: NotificationLog::new(),
        }
    }

    pub fn grocery_list(&self) -> &[GroceryListEntry] {
        &self.data.grocery_list
    }

    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.data.inventory
    }

    pub fn history(&self) -> &[PurchaseHistoryRecord] {
        &self.data.purchase_history
    }

    pub fn is_pending(&self, name: &str) -> bool {
        let name = normalize_name(name);
        self.data.grocery_list.iter().any(|e| e.name == name)
    }

    pub fn add_to_grocery_list(&mut self, name: &str, quantity: &str) -> Result<()> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(GrocerError::Validation("Item name is required".to_string()));
        }
        if let Some(alt) = healthier_substitute(&name) {
            self.notifications
                .suggestion(format!("Healthier choice: try '{alt}' instead of '{name}'"));
        }
        if self.is_pending(&name) {
            return Err(GrocerError::Duplicate(name));
        }

        self.data.grocery_list.push(GroceryListEntry {
            name: name.clone(),
            quantity: quantity.trim().to_string(),
        });
        tracing::debug!(item = %name, "added to grocery list");
        self.notifications
            .success(format!("Added '{name}' to the grocery list"));
        self.persist();
        Ok(())
    }

    pub fn mark_as_purchased(&mut self, name: &str, today: NaiveDate) -> Result<InventoryEntry> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(GrocerError::Validation("Item name is required".to_string()));
        }

        let shelf_life = shelf_life_days(&name, self.limits.default_shelf_life_days).max(0);
        let mut entry = InventoryEntry {
            name: name.clone(),
            purchase_date: today,
            expiry_date: date_after(today, shelf_life as u64)?,
            days_left: 0,
        };
        entry.refresh(today);

        self.data.inventory.push(entry.clone());
        self.data.purchase_history.push(PurchaseHistoryRecord {
            name: name.clone(),
            purchase_date: today,
        });
        self.data.grocery_list.retain(|e| e.name != name);

        tracing::debug!(item = %name, expiry = %entry.expiry_date, "purchased");
        self.notifications.success(format!(
            "Marked '{name}' as purchased (expires {})",
            entry.expiry_date
        ));
        self.persist();
        Ok(entry)
    }

    /// Drop every pending entry for the selected name. Returns how many were removed.
    pub fn remove_from_list(&mut self, selected: Option<&str>) -> Result<usize> {
        let name = selected.map(normalize_name).unwrap_or_default();
        if name.is_empty() {
            return Err(GrocerError::Selection);
        }

        let before = self.data.grocery_list.len();
        self.data.grocery_list.retain(|e| e.name != name);
        let removed = before - self.data.grocery_list.len();

        self.notifications
            .info(format!("Removed '{name}' from the grocery list"));
        self.persist();
        Ok(removed)
    }

    /// Use up the oldest inventory entry with this name.
    pub fn consume(&mut self, name: &str) -> Result<InventoryEntry> {
        let name = normalize_name(name);
        let idx = self
            .data
            .inventory
            .iter()
            .enumerate()
            .filter(|(_, e)| e.name == name)
            .min_by_key(|(_, e)| e.purchase_date)
            .map(|(i, _)| i)
            .ok_or_else(|| GrocerError::Validation(format!("'{name}' is not in the pantry")))?;

        let entry = self.data.inventory.remove(idx);
        self.notifications.info(format!("Used up '{name}'"));
        self.persist();
        Ok(entry)
    }

    /// Refresh days-left, purge long-expired entries, and warn about the rest.
    /// Running it again without the date moving produces the same warnings.
    pub fn check_expiry(&mut self, today: NaiveDate) -> usize {
        for entry in &mut self.data.inventory {
            entry.refresh(today);
        }

        let (purged, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.data.inventory)
            .into_iter()
            .partition(|e| should_purge(e.days_left));
        self.data.inventory = kept;

        for entry in &purged {
            tracing::debug!(item = %entry.name, days_left = entry.days_left, "purged");
            self.notifications.info(format!(
                "Removed expired '{}' from the pantry",
                entry.name
            ));
        }

        let mut warnings = Vec::new();
        for entry in &self.data.inventory {
            match expiry_status(today, entry.expiry_date, self.limits.expiry_warning_days) {
                ExpiryStatus::Fresh => {}
                ExpiryStatus::ExpiresSoon(d) => {
                    warnings.push(format!("'{}' expires {}!", entry.name, days(d)));
                }
                ExpiryStatus::Expired(d) => {
                    warnings.push(format!("'{}' expired {}", entry.name, days(d)));
                }
            }
        }
        let count = warnings.len();
        for w in warnings {
            self.notifications.warning(w);
        }

        self.persist();
        count
    }

    /// Emit a suggestion for every item due to be bought again.
    pub fn suggest_repeat_purchases(&mut self, today: NaiveDate) -> Vec<String> {
        let names = repeat_purchase_suggestions(
            &self.data.purchase_history,
            &self.data.grocery_list,
            today,
            &self.limits,
        );
        for name in &names {
            self.notifications.suggestion(format!(
                "You often buy '{name}'. Add it to your grocery list again?"
            ));
        }
        names
    }

    fn persist(&mut self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = persistence::save(path, &self.data) {
            tracing::warn!(error = %e, "pantry not saved");
            self.notifications
                .warning(format!("Could not save pantry: {e}"));
        }
    }
}
