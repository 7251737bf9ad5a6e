use crate::decimal::{Money, Rate};

/// monthly interest charge on a balance
///
/// pure and total: `balance >= 0`, `monthly_rate >= 0`, result rounded
/// half-up to cents
pub fn calculate_interest(balance: Money, monthly_rate: Rate) -> Money {
    Money::from_decimal(balance.as_decimal() * monthly_rate.as_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_balance_accrues_nothing() {
        let rate = Rate::from_percentage(dec!(24)).monthly_rate();
        assert_eq!(calculate_interest(Money::ZERO, rate), Money::ZERO);
    }

    #[test]
    fn test_zero_rate_accrues_nothing() {
        assert_eq!(calculate_interest(Money::from_major(10_000), Rate::ZERO), Money::ZERO);
    }

    #[test]
    fn test_two_percent_monthly() {
        // 24% apr on 1000.00 is 20.00 per month
        let rate = Rate::from_percentage(dec!(24)).monthly_rate();
        assert_eq!(
            calculate_interest(Money::from_major(1_000), rate),
            Money::from_major(20)
        );
    }

    #[test]
    fn test_result_rounds_half_up_to_cents() {
        let rate = Rate::from_decimal(dec!(0.02));
        // 844.48 * 0.02 = 16.8896
        assert_eq!(
            calculate_interest(Money::from_str_exact("844.48").unwrap(), rate),
            Money::from_str_exact("16.89").unwrap()
        );
        // 100.25 * 0.02 = 2.005, half-up to 2.01
        assert_eq!(
            calculate_interest(Money::from_str_exact("100.25").unwrap(), rate),
            Money::from_str_exact("2.01").unwrap()
        );
    }
}
