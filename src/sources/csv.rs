//! CSV card source
//!
//! Reads the planner's CSV layout. Headers are normalized by stripping a
//! leading row-number prefix so spreadsheet exports like
//! `"1   Current Balance"` still map onto the expected columns. The CSV
//! layout carries no APR column; the configured default applies.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PlannerConfig;
use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::types::CreditCard;

const REQUIRED_HEADERS: [&str; 5] = [
    "Card Name",
    "Current Balance",
    "Credit Limit",
    "Minimum Payment",
    "Payment Due Date",
];

pub fn read_cards_from_csv(path: &Path, config: &PlannerConfig) -> Result<Vec<CreditCard>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut columns: HashMap<String, usize> = HashMap::new();
    for (index, header) in reader.headers()?.iter().enumerate() {
        columns.insert(normalize_header(header), index);
    }

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .filter(|h| !columns.contains_key(**h))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(PlannerError::MissingCsvHeaders {
            headers: missing.join(", "),
        });
    }

    let mut cards = Vec::new();
    for (number, record) in reader.records().enumerate() {
        let record = record?;
        // data rows start at 2, below the header row
        let row = number + 2;
        match parse_row(&record, &columns, config) {
            Ok(card) => cards.push(card),
            Err(err) => warn!(row, %err, "skipping CSV row"),
        }
    }

    if cards.is_empty() {
        return Err(PlannerError::NoValidCards {
            path: path.to_path_buf(),
        });
    }
    Ok(cards)
}

/// strip a leading row-number prefix, e.g. "1   Current Balance"
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start()
        .to_string()
}

fn field<'r>(record: &'r StringRecord, columns: &HashMap<String, usize>, name: &str) -> &'r str {
    columns
        .get(name)
        .and_then(|&index| record.get(index))
        .unwrap_or("")
        .trim()
}

fn parse_row(
    record: &StringRecord,
    columns: &HashMap<String, usize>,
    config: &PlannerConfig,
) -> Result<CreditCard> {
    let name = field(record, columns, "Card Name");
    if name.is_empty() {
        return Err(PlannerError::InvalidCard {
            message: "Card Name cannot be empty".to_string(),
        });
    }

    let balance = parse_money(field(record, columns, "Current Balance"), "Current Balance")?;
    let minimum_payment = parse_money(field(record, columns, "Minimum Payment"), "Minimum Payment")?;

    let credit_limit_raw = field(record, columns, "Credit Limit");
    let credit_limit = if credit_limit_raw.is_empty() {
        Money::ZERO
    } else {
        parse_money(credit_limit_raw, "Credit Limit")?
    };

    let due_date_raw = field(record, columns, "Payment Due Date");
    let due_date = if due_date_raw.is_empty() {
        config.default_due_date.clone()
    } else {
        due_date_raw.to_string()
    };

    let notes = field(record, columns, "Notes").to_string();

    let card = CreditCard::new(name, balance, minimum_payment, config.default_apr)
        .with_due_date(due_date)
        .with_credit_limit(credit_limit)
        .with_notes(notes);
    card.validate()?;
    Ok(card)
}

fn parse_money(raw: &str, field: &str) -> Result<Money> {
    Decimal::from_str(raw)
        .map(Money::from_decimal)
        .map_err(|_| PlannerError::InvalidCard {
            message: format!("{field} must be a number, got {raw:?}"),
        })
}
