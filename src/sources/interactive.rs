//! Interactive card entry
//!
//! Prompt loops generic over the reader and writer so tests can drive
//! them with in-memory buffers. Mirrors the file formats: anything
//! collected here can be saved back out as JSON.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::PlannerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::CreditCard;

type Check<'a, T> = &'a dyn Fn(&T) -> std::result::Result<(), &'static str>;

/// prompt for cards until the user declines to add another
pub fn collect_cards<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &PlannerConfig,
) -> Result<Vec<CreditCard>> {
    let mut cards = Vec::new();
    loop {
        writeln!(output)?;
        writeln!(output, "Enter details for credit card #{}:", cards.len() + 1)?;

        let name = prompt_nonempty(input, output, "Card name")?;
        let credit_limit = prompt_money(
            input,
            output,
            "Credit limit",
            Some(Money::ZERO),
            &|amount| {
                if amount.is_negative() {
                    Err("Credit limit must be greater than or equal to 0.")
                } else {
                    Ok(())
                }
            },
        )?;
        let balance = prompt_money(input, output, "Current balance", None, &|amount| {
            if amount.is_negative() {
                Err("Balance must be greater than or equal to 0.")
            } else if credit_limit.is_positive() && *amount > credit_limit {
                Err("Current balance cannot exceed credit limit.")
            } else {
                Ok(())
            }
        })?;
        let minimum_payment = prompt_money(input, output, "Minimum payment", None, &|amount| {
            if amount.is_negative() {
                Err("Minimum payment must be greater than or equal to 0.")
            } else if balance.is_positive() && *amount > balance {
                Err("Minimum payment cannot be greater than balance.")
            } else {
                Ok(())
            }
        })?;
        let due_date = prompt_default(
            input,
            output,
            "Payment due date (e.g., 15th of month)",
            &config.default_due_date,
        )?;
        let apr = prompt_rate(input, output, "Annual Percentage Rate (APR)", config.default_apr)?;
        let notes = prompt_optional(input, output, "Notes (optional)")?;

        let card = CreditCard::new(name, balance, minimum_payment, apr)
            .with_due_date(due_date)
            .with_credit_limit(credit_limit)
            .with_notes(notes);

        writeln!(
            output,
            "Added: {} - Balance: {}, Min Payment: {}, APR: {}",
            card.name, card.balance, card.minimum_payment, card.apr
        )?;
        cards.push(card);

        writeln!(output)?;
        if !confirm(input, output, "Add another credit card?")? {
            break;
        }
    }
    Ok(cards)
}

/// prompt for the monthly budget until it covers the minimum payments
pub fn prompt_budget<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    required: Money,
) -> Result<Money> {
    writeln!(output)?;
    writeln!(output, "How much can you pay toward credit cards each month?")?;
    loop {
        let raw = prompt_line(input, output, &format!("Monthly amount (minimum required: {required})"))?;
        match Decimal::from_str(raw.trim()) {
            Ok(d) => {
                let amount = Money::from_decimal(d);
                if amount < required {
                    writeln!(
                        output,
                        "Amount must be at least {required} to cover minimum payments."
                    )?;
                } else {
                    return Ok(amount);
                }
            }
            Err(_) => writeln!(output, "Please enter a valid number.")?,
        }
    }
}

/// yes/no question, defaulting to no
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    let answer = prompt_line(input, output, &format!("{question} [y/N]"))?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_nonempty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String> {
    loop {
        let raw = prompt_line(input, output, label)?;
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        writeln!(output, "A value is required.")?;
    }
}

fn prompt_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    let raw = prompt_line(input, output, &format!("{label} [{default}]"))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn prompt_optional<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String> {
    Ok(prompt_line(input, output, label)?.trim().to_string())
}

fn prompt_money<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: Option<Money>,
    check: Check<'_, Money>,
) -> Result<Money> {
    let label = match default {
        Some(d) => format!("{label} [{d}]"),
        None => label.to_string(),
    };
    loop {
        let raw = prompt_line(input, output, &label)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if let Some(d) = default {
                return Ok(d);
            }
            writeln!(output, "Please enter a valid number.")?;
            continue;
        }
        match Decimal::from_str(trimmed) {
            Ok(d) => {
                let amount = Money::from_decimal(d);
                match check(&amount) {
                    Ok(()) => return Ok(amount),
                    Err(message) => writeln!(output, "{message}")?,
                }
            }
            Err(_) => writeln!(output, "Please enter a valid number.")?,
        }
    }
}

fn prompt_rate<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: Rate,
) -> Result<Rate> {
    let label = format!("{label} [{default}]");
    loop {
        let raw = prompt_line(input, output, &label)?;
        let trimmed = raw.trim().trim_end_matches('%');
        if trimmed.is_empty() {
            return Ok(default);
        }
        match Decimal::from_str(trimmed) {
            Ok(p) if !p.is_sign_negative() => return Ok(Rate::from_percentage(p)),
            _ => writeln!(output, "Please enter a valid rate, e.g. 19.99.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_collect(script: &str) -> (Vec<CreditCard>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let cards = collect_cards(&mut input, &mut output, &PlannerConfig::default()).unwrap();
        (cards, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collects_one_card_with_defaults() {
        // name, limit (default), balance, minimum, due (default),
        // apr (default), notes (empty), add another? no
        let (cards, _) = run_collect("Visa\n\n3500\n75\n\n\n\nn\n");

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.name, "Visa");
        assert_eq!(card.balance, Money::from_major(3_500));
        assert_eq!(card.minimum_payment, Money::from_major(75));
        assert_eq!(card.credit_limit, Money::ZERO);
        assert_eq!(card.due_date, "15th");
        assert_eq!(card.apr.as_percentage(), dec!(18));
        assert_eq!(card.notes, "");
    }

    #[test]
    fn test_reprompts_until_values_are_valid() {
        // balance over the limit, then valid; minimum over the balance,
        // then valid
        let (cards, output) = run_collect("Visa\n2000\n2500\n1500\n1600\n50\n\n24\n\nn\n");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].balance, Money::from_major(1_500));
        assert_eq!(cards[0].minimum_payment, Money::from_major(50));
        assert_eq!(cards[0].apr.as_percentage(), dec!(24));
        assert!(output.contains("Current balance cannot exceed credit limit."));
        assert!(output.contains("Minimum payment cannot be greater than balance."));
    }

    #[test]
    fn test_collects_multiple_cards() {
        let (cards, _) =
            run_collect("Visa\n\n500\n25\n\n\n\ny\nAmex\n\n2000\n60\n28th\n20\nbig one\nn\n");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].name, "Amex");
        assert_eq!(cards[1].due_date, "28th");
        assert_eq!(cards[1].apr.as_percentage(), dec!(20));
        assert_eq!(cards[1].notes, "big one");
    }

    #[test]
    fn test_budget_reprompts_below_minimums() {
        let mut input = Cursor::new(&b"abc\n100\n200\n"[..]);
        let mut output = Vec::new();

        let budget = prompt_budget(&mut input, &mut output, Money::from_major(150)).unwrap();

        assert_eq!(budget, Money::from_major(200));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Please enter a valid number."));
        assert!(text.contains("at least 150.00"));
    }

    #[test]
    fn test_eof_is_an_error_not_a_hang() {
        let mut input = Cursor::new(&b"Visa\n"[..]);
        let mut output = Vec::new();

        let err = collect_cards(&mut input, &mut output, &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, crate::errors::PlannerError::Io(_)));
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        let mut input = Cursor::new(&b"\n"[..]);
        let mut output = Vec::new();
        assert!(!confirm(&mut input, &mut output, "Continue?").unwrap());

        let mut input = Cursor::new(&b"YES\n"[..]);
        assert!(confirm(&mut input, &mut output, "Continue?").unwrap());
    }
}
