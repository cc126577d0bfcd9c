//! Common utility functions for tax calculations.

use rust_decimal::Decimal;

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::common::max;
///
/// assert_eq!(max(dec!(48350.00), dec!(0.00)), dec!(48350.00));
/// assert_eq!(max(dec!(-12500.00), dec!(0.00)), dec!(0.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(14600.00), dec!(20000.00));

        assert_eq!(result, dec!(20000.00));
    }

    #[test]
    fn max_returns_first_when_larger() {
        let result = max(dec!(14600.00), dec!(5000.00));

        assert_eq!(result, dec!(14600.00));
    }

    #[test]
    fn max_floors_negative_against_zero() {
        let result = max(dec!(-12500.00), dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(150.00), dec!(150.00));

        assert_eq!(result, dec!(150.00));
    }
}
