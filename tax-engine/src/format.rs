//! Display formatting for engine outputs.
//!
//! These helpers render final numbers for presentation and are the only
//! rounding sites in the crate; the calculation pipeline itself stays exact.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole-dollar U.S. currency.
///
/// Rounds half-up to whole dollars and groups thousands with commas.
/// Negative amounts carry a leading minus sign: `-$8,182`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::format::format_currency;
///
/// assert_eq!(format_currency(dec!(3818.00)), "$3,818");
/// assert_eq!(format_currency(dec!(1234.56)), "$1,235");
/// assert_eq!(format_currency(dec!(-8182.00)), "-$8,182");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_thousands(&rounded.abs().to_string());

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a fractional rate as a percentage with one decimal place.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::format::format_percentage;
///
/// assert_eq!(format_percentage(dec!(0.12)), "12.0%");
/// assert_eq!(format_percentage(dec!(0.2255)), "22.6%");
/// ```
pub fn format_percentage(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}%")
}

/// Inserts comma separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
