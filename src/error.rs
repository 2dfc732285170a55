use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrocerError {
    #[error("{0}")]
    Validation(String),

    #[error("Insufficient stock for '{name}': requested {requested}, available {available}")]
    Stock {
        name: String,
        requested: f64,
        available: f64,
    },

    #[error("'{0}' is already on the grocery list")]
    Duplicate(String),

    #[error("No item selected")]
    Selection,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, GrocerError>;
