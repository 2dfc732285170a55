mod cli;
mod error;
mod fmt;
mod models;
mod notifications;
mod pantry;
mod persistence;
mod rules;
mod settings;
mod store;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ListCommands, PantryCommands, StoreCommands};

fn init_logging() {
    let filter = std::env::var("GROCER_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let today = cli::today_or_now(cli.today);

    let result = match cli.command {
        None => cli::dashboard::run(today),
        Some(Commands::Init { data_dir }) => cli::init::run(today, data_dir),
        Some(Commands::Store { command }) => match command {
            StoreCommands::Catalog => cli::store::catalog(today),
            StoreCommands::Sell { item, qty, price } => {
                cli::store::sell(today, &item, &qty, price.as_deref())
            }
            StoreCommands::Bill => cli::store::bill(today),
            StoreCommands::Checkout => cli::store::checkout(today),
            StoreCommands::Check => cli::store::check(today),
            StoreCommands::Reset => cli::store::reset(today),
        },
        Some(Commands::List { command }) => match command {
            ListCommands::Show => cli::list::show(),
            ListCommands::Add { item, qty } => cli::list::add(&item, &qty),
            ListCommands::Remove { item } => cli::list::remove(item.as_deref()),
            ListCommands::Buy { item } => cli::list::buy(today, &item),
        },
        Some(Commands::Pantry { command }) => match command {
            PantryCommands::Show => cli::pantry::show(today),
            PantryCommands::Check => cli::pantry::check(today),
            PantryCommands::Use { item } => cli::pantry::consume(&item),
            PantryCommands::History => cli::pantry::history(),
        },
        Some(Commands::Status) => cli::status::run(today),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "grocer", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
