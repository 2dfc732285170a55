use chrono::NaiveDate;

use crate::cli::{open_pantry, open_store};
use crate::error::Result;
use crate::fmt::money;
use crate::settings::{load_settings, settings_file_exists};

pub fn run(today: NaiveDate) -> Result<()> {
    if !settings_file_exists() {
        println!("Not set up yet. Run `grocer init` to get started.");
        return Ok(());
    }

    let settings = load_settings();
    println!("Data dir:   {}", settings.data_dir);
    println!("Currency:   {}", settings.currency);
    println!(
        "Rules:      warn {} day(s) before expiry, default shelf life {} day(s)",
        settings.expiry_warning_days, settings.default_shelf_life_days
    );
    println!(
        "Reminders:  bought {}+ times in {} days, last bought {}+ days ago",
        settings.repeat_min_count, settings.repeat_window_days, settings.repeat_min_gap_days
    );

    let store = open_store(&settings, today)?;
    let pantry = open_pantry(&settings);

    println!();
    println!("Catalog items:   {}", store.catalog().len());
    println!(
        "Bill lines:      {} ({})",
        store.bill().len(),
        money(&settings.currency, store.bill_total())
    );
    println!("Grocery list:    {}", pantry.grocery_list().len());
    println!("Pantry items:    {}", pantry.inventory().len());
    println!("Purchases:       {}", pantry.history().len());
    Ok(())
}
