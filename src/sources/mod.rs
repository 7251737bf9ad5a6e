//! Card sources
//!
//! Collaborators that produce validated `CreditCard` records for the
//! scheduler: JSON and CSV files, and interactive prompting. Every card
//! returned from this module has passed `CreditCard::validate`.

pub mod csv;
pub mod interactive;
pub mod json;

pub use self::csv::read_cards_from_csv;
pub use self::interactive::{collect_cards, confirm, prompt_budget};
pub use self::json::{read_cards_from_json, save_cards_to_json};

use std::path::Path;

use crate::config::PlannerConfig;
use crate::errors::{PlannerError, Result};
use crate::types::CreditCard;

/// load cards from a file, dispatching on the extension
pub fn load_cards(path: &Path, config: &PlannerConfig) -> Result<Vec<CreditCard>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "json" => json::read_cards_from_json(path, config),
        "csv" => csv::read_cards_from_csv(path, config),
        _ => Err(PlannerError::UnsupportedFileType { extension }),
    }
}
