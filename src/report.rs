//! Terminal report formatting
//!
//! Renders the card summary, the schedule overview, and the detailed
//! month-by-month view as plain strings; the binary decides where they
//! go. The zero-month "already paid off" result and the non-terminating
//! partial result get their own wording.

use crate::decimal::Money;
use crate::schedule::{PaymentSchedule, ScheduleOutcome, MAX_SCHEDULE_MONTHS};
use crate::types::CreditCard;

const WIDE: usize = 50;

/// format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// format as $1,234.56
pub fn format_usd(amount: Money) -> String {
    let text = amount.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// numbered card list sorted by ascending balance, with totals
pub fn card_summary(cards: &[CreditCard]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", double_separator(WIDE)));
    out.push_str("CREDIT CARD SUMMARY\n");
    out.push_str(&format!("{}\n", double_separator(WIDE)));

    let mut sorted: Vec<&CreditCard> = cards.iter().collect();
    sorted.sort_by_key(|c| c.balance);

    for (number, card) in sorted.iter().enumerate() {
        out.push_str(&format!("{}. {}:\n", number + 1, card.name));
        out.push_str(&format!("   Balance: {}\n", format_usd(card.balance)));
        out.push_str(&format!(
            "   Minimum Payment: {}\n",
            format_usd(card.minimum_payment)
        ));
        out.push_str(&format!("   APR: {}\n", card.apr));
        if card.credit_limit.is_positive() {
            out.push_str(&format!(
                "   Credit Limit: {}\n",
                format_usd(card.credit_limit)
            ));
            out.push_str(&format!(
                "   Available Credit: {}\n",
                format_usd(card.available_credit())
            ));
        }
        if !card.notes.is_empty() {
            out.push_str(&format!("   Notes: {}\n", card.notes));
        }
    }

    let total_balance = cards
        .iter()
        .map(|c| c.balance)
        .fold(Money::ZERO, |acc, b| acc + b);
    let total_minimums = cards
        .iter()
        .map(|c| c.effective_minimum())
        .fold(Money::ZERO, |acc, m| acc + m);
    out.push_str(&format!("\nTotal Debt: {}\n", format_usd(total_balance)));
    out.push_str(&format!(
        "Total Minimum Payments: {}\n",
        format_usd(total_minimums)
    ));
    out
}

/// headline numbers for a computed schedule
pub fn schedule_overview(schedule: &PaymentSchedule, monthly_budget: Money) -> String {
    let mut out = String::new();

    if schedule.is_already_paid_off() {
        out.push_str("\nAll credit cards already carry a zero balance. No payment schedule needed.\n");
        return out;
    }

    out.push_str(&format!("\n{}\n", double_separator(WIDE)));
    out.push_str("DEBT PAYOFF SCHEDULE (Debt Snowball Method)\n");
    out.push_str(&format!("{}\n", double_separator(WIDE)));
    out.push_str("Strategy: pay minimums on all cards, extra payment goes to smallest balance\n");
    out.push_str(&format!("Monthly Budget: {}\n", format_usd(monthly_budget)));

    let months = schedule.total_months();
    match schedule.outcome {
        ScheduleOutcome::Settled => {
            out.push_str(&format!(
                "Payoff Time: {} months ({} years, {} months)\n",
                months,
                months / 12,
                months % 12
            ));
        }
        ScheduleOutcome::NonTerminating => {
            out.push_str(&format!(
                "WARNING: debts were not paid off within {MAX_SCHEDULE_MONTHS} months.\n"
            ));
            out.push_str(
                "The budget covers the minimum payments but never reduces the principal \
                 to zero; the totals below cover only the simulated months.\n",
            );
        }
    }

    out.push_str(&format!(
        "Total Interest Paid: {}\n",
        format_usd(schedule.total_interest_paid)
    ));
    out.push_str(&format!(
        "Total Amount Paid: {}\n",
        format_usd(schedule.total_amount_paid)
    ));

    if !schedule.payoff_order.is_empty() {
        out.push_str(&format!(
            "Payoff Order: {}\n",
            schedule.payoff_order.join(", ")
        ));
    }
    if !schedule.already_paid.is_empty() {
        out.push_str(&format!(
            "Already paid off: {}\n",
            schedule.already_paid.join(", ")
        ));
    }
    out
}

/// month-by-month breakdown of every payment
pub fn detailed_schedule(schedule: &PaymentSchedule) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", double_separator(WIDE)));
    out.push_str("DETAILED PAYMENT SCHEDULE\n");
    out.push_str(&format!("{}\n", double_separator(WIDE)));

    for record in &schedule.months {
        out.push_str(&format!("\nMonth {}:\n", record.month));
        out.push_str(&format!(
            "  Total Paid: {} | Interest: {}\n",
            format_usd(record.total_paid),
            format_usd(record.interest_accrued)
        ));
        for payment in &record.payments {
            if payment.payment.is_zero() {
                continue;
            }
            let paid_off = if payment.balance_after.is_zero() {
                " (paid off)"
            } else {
                ""
            };
            out.push_str(&format!(
                "  - {}: {} (Interest: {}, Principal: {}) -> Balance: {}{}\n",
                payment.card,
                format_usd(payment.payment),
                format_usd(payment.interest),
                format_usd(payment.principal),
                format_usd(payment.balance_after),
                paid_off
            ));
        }
    }

    if schedule.is_settled() {
        out.push_str(&format!(
            "\nAll cards paid off in {} months.\n",
            schedule.total_months()
        ));
    }
    out
}
