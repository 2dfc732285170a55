pub mod dashboard;
pub mod init;
pub mod list;
pub mod pantry;
pub mod render;
pub mod status;
pub mod store;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::error::Result;
use crate::models::Notification;
use crate::pantry::Pantry;
use crate::settings::Settings;
use crate::store::Store;

pub(crate) fn today_or_now(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

pub(crate) fn open_store(settings: &Settings, today: NaiveDate) -> Result<Store> {
    Store::open(&settings.store_path(), today, settings.thresholds())
}

pub(crate) fn open_pantry(settings: &Settings) -> Pantry {
    Pantry::open(&settings.pantry_path(), settings.thresholds())
}

pub(crate) fn print_notifications(messages: &[Notification]) {
    if !messages.is_empty() {
        println!("{}", render::render_notifications(messages));
    }
}

#[derive(Parser)]
#[command(name = "grocer", about = "Grocery inventory, shopping list and billing helper.")]
pub struct Cli {
    /// Treat this date as today: YYYY-MM-DD
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up grocer: choose a data directory and seed the store catalog.
    Init {
        /// Path for grocer data (default: ~/Documents/grocer)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Shop counter: catalog, sales and the current bill.
    Store {
        #[command(subcommand)]
        command: StoreCommands,
    },
    /// Manage the pending grocery list.
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Purchased items at home.
    Pantry {
        #[command(subcommand)]
        command: PantryCommands,
    },
    /// Show settings and data summary.
    Status,
    /// Print shell completions.
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum StoreCommands {
    /// Show the stocked catalog.
    Catalog,
    /// Sell an item onto the current bill.
    Sell {
        /// Item name, e.g. 'olive oil'
        item: String,
        /// Quantity to sell
        #[arg(long)]
        qty: String,
        /// Selling price per unit (default: catalog unit price)
        #[arg(long)]
        price: Option<String>,
    },
    /// Show the current bill.
    Bill,
    /// Close out the current bill.
    Checkout,
    /// Warn about catalog items close to expiry.
    Check,
    /// Restore the default catalog and clear the bill.
    Reset,
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// Show pending items.
    Show,
    /// Add an item to the grocery list.
    Add {
        /// Item name
        item: String,
        /// Requested quantity, free text (e.g. '2 packs')
        #[arg(long, default_value = "")]
        qty: String,
    },
    /// Remove an item from the grocery list.
    Remove {
        /// Item name
        item: Option<String>,
    },
    /// Mark an item as purchased and move it into the pantry.
    Buy {
        /// Item name
        item: String,
    },
}

#[derive(Subcommand)]
pub enum PantryCommands {
    /// Show purchased items with days left.
    Show,
    /// Expiry warnings and repeat-purchase reminders.
    Check,
    /// Use up an item.
    Use {
        /// Item name
        item: String,
    },
    /// Show purchase history.
    History,
}
