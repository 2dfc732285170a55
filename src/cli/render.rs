use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::{days, money, quantity};
use crate::models::{
    BillLine, GroceryListEntry, InventoryEntry, Item, Notification, NotificationKind,
    PurchaseHistoryRecord,
};
use crate::rules::days_left;

pub fn render_catalog(items: &[Item], currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Qty", "Unit Price", "Expiry", "Total"]);
    for item in items {
        let qty = format!("{} {}", quantity(item.quantity), item.unit);
        let qty_cell = if item.quantity > 0.0 {
            Cell::new(qty)
        } else {
            Cell::new(qty.red().to_string())
        };
        table.add_row(vec![
            Cell::new(&item.name),
            qty_cell,
            Cell::new(money(currency, item.unit_price)),
            Cell::new(item.expiry),
            Cell::new(money(currency, item.stock_value())),
        ]);
    }
    table
}

pub fn render_bill(lines: &[BillLine], currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Qty", "Price", "Total"]);
    for line in lines {
        table.add_row(vec![
            Cell::new(&line.name),
            Cell::new(quantity(line.quantity)),
            Cell::new(money(currency, line.unit_price)),
            Cell::new(money(currency, line.total)),
        ]);
    }
    let total: f64 = lines.iter().map(|l| l.total).sum();
    table.add_row(vec![
        Cell::new("TOTAL".bold()),
        Cell::new(""),
        Cell::new(""),
        Cell::new(money(currency, total).green().bold()),
    ]);
    table
}

pub fn render_grocery_list(entries: &[GroceryListEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Quantity"]);
    for entry in entries {
        table.add_row(vec![Cell::new(&entry.name), Cell::new(&entry.quantity)]);
    }
    table
}

/// Days-left is computed against `today` rather than trusting the stored value.
pub fn render_inventory(entries: &[InventoryEntry], today: NaiveDate, warn_days: i64) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Purchased", "Expires", "Days Left"]);
    for entry in entries {
        let remaining = days_left(today, entry.expiry_date);
        let left = days(remaining);
        let left = if remaining < 0 {
            left.red().to_string()
        } else if remaining <= warn_days {
            left.yellow().to_string()
        } else {
            left
        };
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.purchase_date),
            Cell::new(entry.expiry_date),
            Cell::new(left),
        ]);
    }
    table
}

pub fn render_history(records: &[PurchaseHistoryRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Purchased"]);
    for record in records.iter().rev() {
        table.add_row(vec![Cell::new(&record.name), Cell::new(record.purchase_date)]);
    }
    table
}

fn badge(kind: NotificationKind) -> String {
    let label = format!("{:<10}", kind.label().to_uppercase());
    match kind {
        NotificationKind::Info => label.blue().to_string(),
        NotificationKind::Warning => label.yellow().bold().to_string(),
        NotificationKind::Success => label.green().to_string(),
        NotificationKind::Suggestion => label.cyan().to_string(),
    }
}

pub fn render_notifications(messages: &[Notification]) -> String {
    messages
        .iter()
        .map(|n| format!("[{}] {} {}", n.at.format("%H:%M:%S"), badge(n.kind), n.text))
        .collect::<Vec<_>>()
        .join("\n")
}
