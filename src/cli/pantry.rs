use chrono::NaiveDate;

use crate::cli::render::{render_history, render_inventory};
use crate::cli::{open_pantry, print_notifications};
use crate::error::Result;
use crate::settings::load_settings;

pub fn show(today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let pantry = open_pantry(&settings);
    if pantry.inventory().is_empty() {
        println!("The pantry is empty.");
        return Ok(());
    }
    println!(
        "Pantry\n{}",
        render_inventory(pantry.inventory(), today, settings.expiry_warning_days)
    );
    Ok(())
}

pub fn check(today: NaiveDate) -> Result<()> {
    let mut pantry = open_pantry(&load_settings());
    let warnings = pantry.check_expiry(today);
    let suggestions = pantry.suggest_repeat_purchases(today);
    print_notifications(&pantry.notifications.take());
    if warnings == 0 && suggestions.is_empty() {
        println!("Nothing needs attention.");
    }
    Ok(())
}

pub fn consume(item: &str) -> Result<()> {
    let mut pantry = open_pantry(&load_settings());
    let result = pantry.consume(item);
    print_notifications(&pantry.notifications.take());
    result.map(|_| ())
}

pub fn history() -> Result<()> {
    let pantry = open_pantry(&load_settings());
    if pantry.history().is_empty() {
        println!("No purchases recorded yet.");
        return Ok(());
    }
    println!("Purchase History\n{}", render_history(pantry.history()));
    Ok(())
}
