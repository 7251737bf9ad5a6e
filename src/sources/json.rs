//! JSON card source
//!
//! Reads the two layouts the planner accepts: a bare array of card
//! objects, or an object with a `cards` array and an optional
//! `default_apr`. Malformed entries are skipped with a warning so one
//! bad card does not sink the file. Also writes card data back out for
//! reuse on a later run.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::config::PlannerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{PlannerError, Result};
use crate::types::CreditCard;

const SHAPE_HINT: &str = "JSON must be an array of cards or an object with a 'cards' array";

pub fn read_cards_from_json(path: &Path, config: &PlannerConfig) -> Result<Vec<CreditCard>> {
    let raw = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&raw)?;

    let (entries, default_apr) = match &data {
        Value::Array(entries) => (entries.as_slice(), config.default_apr),
        Value::Object(map) => {
            let entries = map
                .get("cards")
                .and_then(Value::as_array)
                .ok_or_else(|| invalid(SHAPE_HINT))?;
            let default_apr = match map.get("default_apr") {
                Some(value) => Rate::from_percentage(parse_decimal(value, "default_apr")?),
                None => config.default_apr,
            };
            (entries.as_slice(), default_apr)
        }
        _ => return Err(invalid(SHAPE_HINT)),
    };

    let mut cards = Vec::new();
    for (number, entry) in entries.iter().enumerate() {
        match parse_card(entry, default_apr, config) {
            Ok(card) => cards.push(card),
            Err(err) => warn!(card = number + 1, %err, "skipping card entry"),
        }
    }

    if cards.is_empty() {
        return Err(PlannerError::NoValidCards {
            path: path.to_path_buf(),
        });
    }
    Ok(cards)
}

fn parse_card(entry: &Value, default_apr: Rate, config: &PlannerConfig) -> Result<CreditCard> {
    let object = entry
        .as_object()
        .ok_or_else(|| invalid("card entry must be an object"))?;

    let name = object
        .get("card_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("card_name is required and cannot be empty"))?;

    let balance = money_field(object, "current_balance")?;
    let minimum_payment = money_field(object, "minimum_payment")?;

    let due_date = match object.get("payment_due_date").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => config.default_due_date.clone(),
    };
    let apr = match object.get("apr") {
        Some(value) => Rate::from_percentage(parse_decimal(value, "apr")?),
        None => default_apr,
    };
    let credit_limit = match object.get("credit_limit") {
        Some(value) => Money::from_decimal(parse_decimal(value, "credit_limit")?),
        None => Money::ZERO,
    };
    let notes = object
        .get("notes")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let card = CreditCard::new(name, balance, minimum_payment, apr)
        .with_due_date(due_date)
        .with_credit_limit(credit_limit)
        .with_notes(notes);
    card.validate()?;
    Ok(card)
}

fn money_field(object: &Map<String, Value>, field: &str) -> Result<Money> {
    let value = object
        .get(field)
        .ok_or_else(|| invalid(&format!("{field} is required")))?;
    Ok(Money::from_decimal(parse_decimal(value, field)?))
}

/// accept JSON numbers and numeric strings
fn parse_decimal(value: &Value, field: &str) -> Result<Decimal> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err(invalid(&format!("{field} must be a number"))),
    };
    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| invalid(&format!("{field} must be a number, got {raw:?}")))
}

fn invalid(message: &str) -> PlannerError {
    PlannerError::InvalidCard {
        message: message.to_string(),
    }
}

/// write cards out in the array layout, appending `.json` when missing;
/// returns the path actually written
pub fn save_cards_to_json(cards: &[CreditCard], path: &Path) -> Result<PathBuf> {
    let has_json_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let path = if has_json_ext {
        path.to_path_buf()
    } else {
        let mut with_ext = path.as_os_str().to_owned();
        with_ext.push(".json");
        PathBuf::from(with_ext)
    };

    let entries: Vec<Value> = cards
        .iter()
        .map(|card| {
            json!({
                "card_name": card.name,
                "current_balance": decimal_json(card.balance.as_decimal()),
                "minimum_payment": decimal_json(card.minimum_payment.as_decimal()),
                "payment_due_date": card.due_date,
                "apr": decimal_json(card.apr.as_percentage()),
                "credit_limit": decimal_json(card.credit_limit.as_decimal()),
                "notes": card.notes,
            })
        })
        .collect();

    fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
    Ok(path)
}

fn decimal_json(d: Decimal) -> Value {
    d.to_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(d.to_string()))
}
