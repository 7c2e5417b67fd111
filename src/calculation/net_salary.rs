//! Gross-to-net salary calculation.
//!
//! Two flat employee-side deductions are taken from gross pay: the CNSS
//! social-security contribution and a simplified IRPP income tax.

use rust_decimal::{Decimal, RoundingStrategy};

/// Returns the employee CNSS contribution rate (9.18%).
pub fn cnss_employee_rate() -> Decimal {
    Decimal::new(918, 4)
}

/// Returns the flat IRPP rate (5%).
pub fn irpp_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Number of decimal places every reported amount is rounded to.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// The outcome of a gross-to-net calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetSalaryResult {
    /// The gross figure the calculation started from, unrounded.
    pub gross: Decimal,
    /// CNSS deduction, rounded.
    pub cnss: Decimal,
    /// IRPP deduction, rounded.
    pub irpp: Decimal,
    /// Net pay, rounded.
    pub net: Decimal,
}

/// Rounds an amount to two decimal places, halves away from zero.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Derives net pay and the itemized deductions from a gross salary.
///
/// Net is computed from the unrounded deductions and rounded once, so
/// `cnss + irpp + net` may differ from `gross` by at most two cents.
/// Negative input is passed through without complaint.
///
/// # Examples
///
/// ```
/// use payroll_records::calculation::calculate_net_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_net_salary(Decimal::new(1000, 0));
/// assert_eq!(result.cnss, Decimal::from_str("91.80").unwrap());
/// assert_eq!(result.irpp, Decimal::from_str("50.00").unwrap());
/// assert_eq!(result.net, Decimal::from_str("858.20").unwrap());
/// ```
pub fn calculate_net_salary(gross: Decimal) -> NetSalaryResult {
    let cnss = gross * cnss_employee_rate();
    let irpp = gross * irpp_rate();
    let net = gross - cnss - irpp;

    NetSalaryResult {
        gross,
        cnss: round_amount(cnss),
        irpp: round_amount(irpp),
        net: round_amount(net),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rates_are_exact() {
        assert_eq!(cnss_employee_rate(), dec("0.0918"));
        assert_eq!(irpp_rate(), dec("0.05"));
    }

    #[test]
    fn test_one_thousand_gross() {
        let result = calculate_net_salary(dec("1000"));

        assert_eq!(result.gross, dec("1000"));
        assert_eq!(result.cnss, dec("91.8"));
        assert_eq!(result.irpp, dec("50"));
        assert_eq!(result.net, dec("858.2"));
    }

    #[test]
    fn test_zero_gross_yields_zero_everywhere() {
        let result = calculate_net_salary(Decimal::ZERO);

        assert!(result.cnss.is_zero());
        assert!(result.irpp.is_zero());
        assert!(result.net.is_zero());
    }

    #[test]
    fn test_rounding_applied_to_each_amount() {
        // 1234 * 0.0918 = 113.2812, 1234 * 0.05 = 61.7, net = 1059.0188
        let result = calculate_net_salary(dec("1234"));

        assert_eq!(result.cnss, dec("113.28"));
        assert_eq!(result.irpp, dec("61.70"));
        assert_eq!(result.net, dec("1059.02"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_amount(dec("0.125")), dec("0.13"));
        assert_eq!(round_amount(dec("-0.125")), dec("-0.13"));
    }

    #[test]
    fn test_negative_gross_passes_through() {
        let result = calculate_net_salary(dec("-1000"));

        assert_eq!(result.cnss, dec("-91.8"));
        assert_eq!(result.net, dec("-858.2"));
    }

    #[test]
    fn test_fractional_gross() {
        // 2500.50 * 0.0918 = 229.5459, * 0.05 = 125.025, net = 2145.9291
        let result = calculate_net_salary(dec("2500.50"));

        assert_eq!(result.cnss, dec("229.55"));
        assert_eq!(result.irpp, dec("125.03"));
        assert_eq!(result.net, dec("2145.93"));
    }

    proptest! {
        #[test]
        fn prop_net_is_rounded_difference(cents in 0i64..1_000_000_000) {
            let gross = Decimal::new(cents, 2);
            let result = calculate_net_salary(gross);

            let expected = round_amount(gross - gross * dec("0.0918") - gross * dec("0.05"));
            prop_assert_eq!(result.net, expected);
        }

        #[test]
        fn prop_parts_sum_to_gross_within_two_cents(cents in 0i64..1_000_000_000) {
            let gross = Decimal::new(cents, 2);
            let result = calculate_net_salary(gross);

            let drift = (result.cnss + result.irpp + result.net - gross).abs();
            prop_assert!(drift <= dec("0.02"), "drift {} for gross {}", drift, gross);
        }

        #[test]
        fn prop_amounts_have_at_most_two_places(units in 0i64..100_000_000) {
            let result = calculate_net_salary(Decimal::from(units));

            prop_assert!(result.cnss.scale() <= AMOUNT_DECIMAL_PLACES);
            prop_assert!(result.irpp.scale() <= AMOUNT_DECIMAL_PLACES);
            prop_assert!(result.net.scale() <= AMOUNT_DECIMAL_PLACES);
        }
    }
}
