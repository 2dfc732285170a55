use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::{open_pantry, open_store, print_notifications};
use crate::error::Result;
use crate::settings::{load_settings, settings_file_exists};

/// Startup check: expiry warnings for both the store and the pantry, plus
/// repeat-purchase reminders.
pub fn run(today: NaiveDate) -> Result<()> {
    if !settings_file_exists() {
        println!("Welcome to grocer. Run `grocer init` to get started, or `grocer --help`.");
        return Ok(());
    }
    let settings = load_settings();

    println!("{}", format!("grocer · {today}").green().bold());

    let mut store = open_store(&settings, today)?;
    let store_warnings = store.check_expiry(today);
    println!("\n{}", "Store".bold());
    print_notifications(&store.notifications.take());
    if store_warnings == 0 {
        println!("Nothing in the catalog is close to expiry.");
    }

    let mut pantry = open_pantry(&settings);
    let pantry_warnings = pantry.check_expiry(today);
    let reminders = pantry.suggest_repeat_purchases(today);
    println!("\n{}", "Pantry".bold());
    print_notifications(&pantry.notifications.take());
    if pantry_warnings == 0 && reminders.is_empty() {
        println!("Nothing needs attention.");
    }
    Ok(())
}
