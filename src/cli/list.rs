use chrono::NaiveDate;

use crate::cli::render::render_grocery_list;
use crate::cli::{open_pantry, print_notifications};
use crate::error::Result;
use crate::settings::load_settings;

pub fn show() -> Result<()> {
    let pantry = open_pantry(&load_settings());
    if pantry.grocery_list().is_empty() {
        println!("The grocery list is empty.");
        return Ok(());
    }
    println!("Grocery List\n{}", render_grocery_list(pantry.grocery_list()));
    Ok(())
}

pub fn add(item: &str, qty: &str) -> Result<()> {
    let mut pantry = open_pantry(&load_settings());
    let result = pantry.add_to_grocery_list(item, qty);
    print_notifications(&pantry.notifications.take());
    result
}

pub fn remove(item: Option<&str>) -> Result<()> {
    let mut pantry = open_pantry(&load_settings());
    let result = pantry.remove_from_list(item);
    print_notifications(&pantry.notifications.take());
    result.map(|_| ())
}

pub fn buy(today: NaiveDate, item: &str) -> Result<()> {
    let mut pantry = open_pantry(&load_settings());
    let result = pantry.mark_as_purchased(item, today);
    print_notifications(&pantry.notifications.take());
    result.map(|_| ())
}
