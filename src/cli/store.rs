use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::render::{render_bill, render_catalog};
use crate::cli::{open_store, print_notifications};
use crate::error::Result;
use crate::fmt::money;
use crate::settings::load_settings;

pub fn catalog(today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let store = open_store(&settings, today)?;
    println!("Catalog\n{}", render_catalog(store.catalog(), &settings.currency));
    Ok(())
}

pub fn sell(today: NaiveDate, item: &str, qty: &str, price: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let mut store = open_store(&settings, today)?;

    let price = match price {
        Some(p) => p.to_string(),
        None => store
            .item(item)
            .map(|i| i.unit_price.to_string())
            .unwrap_or_else(|| "0".to_string()),
    };

    let result = store.add_to_bill(item, qty, &price);
    print_notifications(&store.notifications.take());
    let line = result?;

    println!(
        "Line total: {}   Bill total: {}",
        money(&settings.currency, line.total),
        money(&settings.currency, store.bill_total()).green().bold()
    );
    Ok(())
}

pub fn bill(today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let store = open_store(&settings, today)?;
    if store.bill().is_empty() {
        println!("The bill is empty.");
        return Ok(());
    }
    println!("Current Bill\n{}", render_bill(store.bill(), &settings.currency));
    Ok(())
}

pub fn checkout(today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let mut store = open_store(&settings, today)?;
    if !store.bill().is_empty() {
        println!("Final Bill\n{}", render_bill(store.bill(), &settings.currency));
    }
    let total = store.clear_bill();
    print_notifications(&store.notifications.take());
    println!("Amount due: {}", money(&settings.currency, total).green().bold());
    Ok(())
}

pub fn check(today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let mut store = open_store(&settings, today)?;
    let count = store.check_expiry(today);
    print_notifications(&store.notifications.take());
    if count == 0 {
        println!("No catalog items are close to expiry.");
    }
    Ok(())
}

pub fn reset(today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let mut store = open_store(&settings, today)?;
    store.reset_catalog(today)?;
    print_notifications(&store.notifications.take());
    Ok(())
}
