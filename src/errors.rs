use std::path::PathBuf;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("monthly budget {budget} is less than the minimum payments required {required} (short by {shortfall})")]
    InfeasibleBudget {
        budget: Money,
        required: Money,
        shortfall: Money,
    },

    #[error("invalid card data: {message}")]
    InvalidCard {
        message: String,
    },

    #[error("unsupported file type: {extension:?} (supported: .csv, .json)")]
    UnsupportedFileType {
        extension: String,
    },

    #[error("no valid credit card data found in {}", path.display())]
    NoValidCards {
        path: PathBuf,
    },

    #[error("missing required CSV headers: {headers}")]
    MissingCsvHeaders {
        headers: String,
    },

    #[error("invalid calendar month {input:?}: expected YYYY-MM, year 1900-2100")]
    InvalidCalendarMonth {
        input: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV format: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
