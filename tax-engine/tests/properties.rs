//! Property tests for the tax calculation pipeline.
//!
//! Inputs are generated as whole cents so every amount is an exact decimal.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tax_engine::models::{DeductionType, FilingStatus, PreTaxContributions, TaxInputs};
use tax_engine::{calculate_tax, tables};

/// $2,000,000 in cents; comfortably past every top bracket threshold.
const MAX_CENTS: i64 = 200_000_000_00;

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn inputs(
    filing_status: FilingStatus,
    gross_cents: i64,
    contribution_cents: i64,
    credit_cents: i64,
    withheld_cents: i64,
) -> TaxInputs {
    TaxInputs {
        filing_status,
        gross_income: money(gross_cents),
        pre_tax_contributions: PreTaxContributions {
            retirement_401k: money(contribution_cents),
            hsa: Decimal::ZERO,
            other: Decimal::ZERO,
        },
        deduction_type: DeductionType::Standard,
        itemized_deductions: Decimal::ZERO,
        tax_credits: money(credit_cents),
        tax_withheld: money(withheld_cents),
    }
}

fn any_status() -> impl Strategy<Value = FilingStatus> {
    prop_oneof![
        Just(FilingStatus::Single),
        Just(FilingStatus::MarriedFilingJointly),
        Just(FilingStatus::MarriedFilingSeparately),
        Just(FilingStatus::HeadOfHousehold),
    ]
}

proptest! {
    #[test]
    fn breakdown_taxable_amounts_sum_to_taxable_income(
        status in any_status(),
        gross in 0i64..=MAX_CENTS,
    ) {
        let table = tables::year_2024();
        let result = calculate_tax(&inputs(status, gross, 0, 0, 0), &table).unwrap();

        let sum: Decimal = result
            .bracket_breakdown
            .iter()
            .map(|entry| entry.taxable_amount)
            .sum();
        prop_assert_eq!(sum, result.taxable_income);
    }

    #[test]
    fn breakdown_tax_amounts_sum_to_tax_owed_without_credits(
        status in any_status(),
        gross in 0i64..=MAX_CENTS,
    ) {
        let table = tables::year_2024();
        let result = calculate_tax(&inputs(status, gross, 0, 0, 0), &table).unwrap();

        let sum: Decimal = result
            .bracket_breakdown
            .iter()
            .map(|entry| entry.tax_amount)
            .sum();
        prop_assert_eq!(sum, result.federal_tax_owed);
    }

    #[test]
    fn breakdown_is_ascending_and_contiguous(
        status in any_status(),
        gross in 0i64..=MAX_CENTS,
    ) {
        let table = tables::year_2024();
        let result = calculate_tax(&inputs(status, gross, 0, 0, 0), &table).unwrap();
        let breakdown = &result.bracket_breakdown;

        for entry in breakdown {
            prop_assert!(entry.taxable_amount > Decimal::ZERO);
        }
        for pair in breakdown.windows(2) {
            prop_assert_eq!(pair[0].bracket.max_income, Some(pair[1].bracket.min_income));
            prop_assert!(pair[0].bracket.rate < pair[1].bracket.rate);
        }
    }

    #[test]
    fn tax_owed_is_monotonic_in_income(
        status in any_status(),
        a in 0i64..=MAX_CENTS,
        b in 0i64..=MAX_CENTS,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let table = tables::year_2024();

        let low = calculate_tax(&inputs(status, lo, 0, 0, 0), &table).unwrap();
        let high = calculate_tax(&inputs(status, hi, 0, 0, 0), &table).unwrap();

        prop_assert!(low.federal_tax_owed <= high.federal_tax_owed);
    }

    #[test]
    fn credits_never_drive_tax_below_zero(
        status in any_status(),
        gross in 0i64..=MAX_CENTS,
        credits in 0i64..=MAX_CENTS,
    ) {
        let table = tables::year_2024();
        let result = calculate_tax(&inputs(status, gross, 0, credits, 0), &table).unwrap();

        prop_assert!(result.federal_tax_owed >= Decimal::ZERO);
    }

    #[test]
    fn refund_is_withholding_minus_tax_owed(
        status in any_status(),
        gross in 0i64..=MAX_CENTS,
        withheld in 0i64..=MAX_CENTS,
    ) {
        let table = tables::year_2024();
        let result = calculate_tax(&inputs(status, gross, 0, 0, withheld), &table).unwrap();

        prop_assert_eq!(
            result.refund_or_balance_due,
            money(withheld) - result.federal_tax_owed
        );
    }

    #[test]
    fn effective_rate_is_zero_when_contributions_swallow_income(
        status in any_status(),
        gross in 0i64..=MAX_CENTS,
        excess in 0i64..=MAX_CENTS,
    ) {
        let table = tables::year_2024();
        let result = calculate_tax(&inputs(status, gross, gross + excess, 0, 0), &table).unwrap();

        prop_assert!(result.adjusted_gross_income <= Decimal::ZERO);
        prop_assert_eq!(result.effective_rate, Decimal::ZERO);
        prop_assert_eq!(result.federal_tax_owed, Decimal::ZERO);
    }

    #[test]
    fn calculation_is_deterministic(
        status in any_status(),
        gross in 0i64..=MAX_CENTS,
        credits in 0i64..=MAX_CENTS,
        withheld in 0i64..=MAX_CENTS,
    ) {
        let table = tables::year_2024();
        let request = inputs(status, gross, 0, credits, withheld);

        let first = calculate_tax(&request, &table).unwrap();
        let second = calculate_tax(&request, &table).unwrap();

        prop_assert_eq!(first, second);
    }
}
