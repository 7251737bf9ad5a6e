use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{PlannerError, Result};

/// one revolving-credit account being tracked
///
/// immutable input to the scheduler; the scheduler works on private
/// copies of the balances and never mutates the caller's cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub name: String,
    pub balance: Money,
    pub minimum_payment: Money,
    /// display label for the due date, e.g. "15th"; reporting only
    pub due_date: String,
    /// annual percentage rate as a fraction
    pub apr: Rate,
    /// zero when unknown; reporting only
    pub credit_limit: Money,
    pub notes: String,
}

impl CreditCard {
    pub fn new(name: impl Into<String>, balance: Money, minimum_payment: Money, apr: Rate) -> Self {
        Self {
            name: name.into(),
            balance,
            minimum_payment,
            due_date: "15th".to_string(),
            apr,
            credit_limit: Money::ZERO,
            notes: String::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn with_credit_limit(mut self, credit_limit: Money) -> Self {
        self.credit_limit = credit_limit;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// monthly periodic rate, always derived from the annual rate
    pub fn monthly_rate(&self) -> Rate {
        self.apr.monthly_rate()
    }

    /// minimum due this month; nothing is due once the balance is cleared
    pub fn effective_minimum(&self) -> Money {
        if self.balance.is_zero() {
            Money::ZERO
        } else {
            self.minimum_payment
        }
    }

    /// remaining headroom under the credit limit, zero when no limit is known
    pub fn available_credit(&self) -> Money {
        if self.credit_limit.is_positive() {
            self.credit_limit - self.balance
        } else {
            Money::ZERO
        }
    }

    /// validation contract a card source must satisfy before handing
    /// cards to the scheduler
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidCard {
                message: "card name cannot be empty".to_string(),
            });
        }
        if self.balance.is_negative() {
            return Err(PlannerError::InvalidCard {
                message: format!("{}: balance must be greater than or equal to 0", self.name),
            });
        }
        if self.minimum_payment.is_negative() {
            return Err(PlannerError::InvalidCard {
                message: format!(
                    "{}: minimum payment must be greater than or equal to 0",
                    self.name
                ),
            });
        }
        if self.apr.is_negative() {
            return Err(PlannerError::InvalidCard {
                message: format!("{}: apr must be greater than or equal to 0", self.name),
            });
        }
        if self.balance.is_positive() && self.minimum_payment > self.balance {
            return Err(PlannerError::InvalidCard {
                message: format!(
                    "{}: minimum payment cannot be greater than the balance",
                    self.name
                ),
            });
        }
        if self.credit_limit.is_positive() && self.balance > self.credit_limit {
            return Err(PlannerError::InvalidCard {
                message: format!("{}: balance cannot exceed the credit limit", self.name),
            });
        }
        Ok(())
    }
}
