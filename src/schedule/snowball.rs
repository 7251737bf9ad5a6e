use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{PlannerError, Result};
use crate::interest::calculate_interest;
use crate::types::CreditCard;

use super::{CardPayment, MonthRecord, PaymentSchedule, ScheduleOutcome};

/// hard ceiling on simulated months; schedules that would run past it
/// are returned partial and tagged non-terminating
pub const MAX_SCHEDULE_MONTHS: u32 = 1000;

/// working balance for one card during simulation
struct OpenAccount {
    input_order: usize,
    name: String,
    minimum: Money,
    monthly_rate: Rate,
    balance: Money,
}

/// simulate the debt snowball: minimums on every open card, the whole
/// surplus on the smallest balance, rolled forward as cards retire
///
/// cards with a zero balance are excluded up front and reported in
/// `already_paid`; a budget below the sum of minimums is an error
pub fn create_payment_schedule(
    cards: &[CreditCard],
    monthly_budget: Money,
) -> Result<PaymentSchedule> {
    let already_paid: Vec<String> = cards
        .iter()
        .filter(|c| c.balance.is_zero())
        .map(|c| c.name.clone())
        .collect();

    let mut open: Vec<OpenAccount> = cards
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.balance.is_zero())
        .map(|(input_order, c)| {
            debug_assert!(
                !c.balance.is_negative()
                    && !c.minimum_payment.is_negative()
                    && !c.apr.is_negative(),
                "card sources must validate before scheduling"
            );
            OpenAccount {
                input_order,
                name: c.name.clone(),
                minimum: c.minimum_payment,
                monthly_rate: c.monthly_rate(),
                balance: c.balance,
            }
        })
        .collect();

    if open.is_empty() {
        return Ok(PaymentSchedule {
            months: Vec::new(),
            total_interest_paid: Money::ZERO,
            total_amount_paid: Money::ZERO,
            payoff_order: Vec::new(),
            already_paid,
            outcome: ScheduleOutcome::Settled,
        });
    }

    let required = open
        .iter()
        .map(|c| c.minimum)
        .fold(Money::ZERO, |acc, m| acc + m);
    if monthly_budget < required {
        return Err(PlannerError::InfeasibleBudget {
            budget: monthly_budget,
            required,
            shortfall: required - monthly_budget,
        });
    }

    let mut months = Vec::new();
    let mut payoff_order = Vec::new();
    let mut total_interest_paid = Money::ZERO;
    let mut total_amount_paid = Money::ZERO;
    let mut outcome = ScheduleOutcome::Settled;

    let mut month: u32 = 1;
    while !open.is_empty() {
        if month > MAX_SCHEDULE_MONTHS {
            outcome = ScheduleOutcome::NonTerminating;
            break;
        }

        // smallest balance first; equal balances keep their input order
        open.sort_by_key(|c| (c.balance, c.input_order));

        // the surplus is recomputed over the shrinking active set, which
        // is what rolls a retired card's minimum into the snowball
        let minimums_due = open
            .iter()
            .map(|c| c.minimum)
            .fold(Money::ZERO, |acc, m| acc + m);
        let extra = monthly_budget - minimums_due;

        let mut payments = Vec::with_capacity(open.len());
        let mut total_paid = Money::ZERO;
        let mut interest_accrued = Money::ZERO;

        for (position, account) in open.iter_mut().enumerate() {
            let balance_before = account.balance;
            let interest = calculate_interest(account.balance, account.monthly_rate);
            account.balance += interest;

            // the smallest balance is the snowball target and takes the
            // surplus on top of its minimum; everyone else pays the
            // minimum alone, and any part of a minimum that overshoots
            // the balance is simply not collected this month
            let due = if position == 0 {
                account.minimum + extra
            } else {
                account.minimum
            };
            let payment = due.min(account.balance);
            account.balance -= payment;

            payments.push(CardPayment {
                card: account.name.clone(),
                payment,
                interest,
                principal: payment - interest,
                balance_before,
                balance_after: account.balance,
            });
            total_paid += payment;
            interest_accrued += interest;
        }

        for account in open.iter().filter(|c| c.balance.is_zero()) {
            payoff_order.push(account.name.clone());
        }
        open.retain(|c| !c.balance.is_zero());

        total_interest_paid += interest_accrued;
        total_amount_paid += total_paid;
        debug!(month, total_paid = %total_paid, open = open.len(), "simulated month");
        months.push(MonthRecord {
            month,
            payments,
            total_paid,
            interest_accrued,
        });
        month += 1;
    }

    Ok(PaymentSchedule {
        months,
        total_interest_paid,
        total_amount_paid,
        payoff_order,
        already_paid,
        outcome,
    })
}
