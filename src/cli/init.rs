use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::Result;
use crate::pantry::PantryData;
use crate::persistence;
use crate::settings::{load_settings, save_settings, settings_file_exists, shellexpand_path};
use crate::store::{seed_catalog, StoreData};

pub fn run(today: NaiveDate, data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    } else if !settings_file_exists() {
        // First run: prompt for data dir
        println!("Data directory [{}]: ", settings.data_dir);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        let chosen = input.trim();
        if !chosen.is_empty() {
            settings.data_dir = shellexpand_path(chosen);
        }
    }

    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;

    let store_path = settings.store_path();
    if !store_path.exists() {
        let data = StoreData {
            catalog: seed_catalog(today)?,
            bill: Vec::new(),
        };
        persistence::save(&store_path, &data)?;
        println!("Seeded store catalog with {} items", data.catalog.len());
    }

    let pantry_path = settings.pantry_path();
    if !pantry_path.exists() {
        persistence::save(&pantry_path, &PantryData::default())?;
    }

    println!("Initialized grocer at {}", resolved.display());
    Ok(())
}
