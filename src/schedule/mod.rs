pub mod snowball;

pub use snowball::{create_payment_schedule, MAX_SCHEDULE_MONTHS};

use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// how a simulation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleOutcome {
    /// every balance reached zero
    Settled,
    /// the safety bound was hit before the balances cleared; the
    /// schedule holds the partial months simulated so far
    NonTerminating,
}

/// one card's slice of a simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPayment {
    pub card: String,
    pub payment: Money,
    pub interest: Money,
    /// payment net of interest; negative when interest outran the payment
    pub principal: Money,
    pub balance_before: Money,
    pub balance_after: Money,
}

/// snapshot of every open card for one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// month number, starting at 1
    pub month: u32,
    pub payments: Vec<CardPayment>,
    pub total_paid: Money,
    pub interest_accrued: Money,
}

/// full output of a snowball simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub months: Vec<MonthRecord>,
    pub total_interest_paid: Money,
    pub total_amount_paid: Money,
    /// card names in the order each reached zero balance
    pub payoff_order: Vec<String>,
    /// cards that arrived with a zero balance and never entered the simulation
    pub already_paid: Vec<String>,
    pub outcome: ScheduleOutcome,
}

impl PaymentSchedule {
    /// count of month records produced
    pub fn total_months(&self) -> u32 {
        self.months.len() as u32
    }

    pub fn is_settled(&self) -> bool {
        self.outcome == ScheduleOutcome::Settled
    }

    /// true when every card was already at zero and no months were simulated
    pub fn is_already_paid_off(&self) -> bool {
        self.is_settled() && self.months.is_empty()
    }
}
