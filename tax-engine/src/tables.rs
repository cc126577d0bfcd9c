//! Compiled-in tax year reference data.
//!
//! One constructor per supported tax year. A table is built once at startup
//! and handed to the engine by reference; there is no external load path.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{RateSchedule, TaxBracket, TaxYearTable};

fn bracket(min_income: Decimal, max_income: Option<Decimal>, rate: Decimal) -> TaxBracket {
    TaxBracket {
        min_income,
        max_income,
        rate,
    }
}

/// Returns the 2024 federal bracket and standard deduction table.
///
/// Figures from Rev. Proc. 2023-34 (2024 inflation adjustments).
pub fn year_2024() -> TaxYearTable {
    TaxYearTable {
        tax_year: 2024,
        single: RateSchedule {
            standard_deduction: dec!(14600),
            brackets: vec![
                bracket(dec!(0), Some(dec!(11600)), dec!(0.10)),
                bracket(dec!(11600), Some(dec!(47150)), dec!(0.12)),
                bracket(dec!(47150), Some(dec!(100525)), dec!(0.22)),
                bracket(dec!(100525), Some(dec!(191950)), dec!(0.24)),
                bracket(dec!(191950), Some(dec!(243725)), dec!(0.32)),
                bracket(dec!(243725), Some(dec!(609350)), dec!(0.35)),
                bracket(dec!(609350), None, dec!(0.37)),
            ],
        },
        married_filing_jointly: RateSchedule {
            standard_deduction: dec!(29200),
            brackets: vec![
                bracket(dec!(0), Some(dec!(23200)), dec!(0.10)),
                bracket(dec!(23200), Some(dec!(94300)), dec!(0.12)),
                bracket(dec!(94300), Some(dec!(201050)), dec!(0.22)),
                bracket(dec!(201050), Some(dec!(383900)), dec!(0.24)),
                bracket(dec!(383900), Some(dec!(487450)), dec!(0.32)),
                bracket(dec!(487450), Some(dec!(731200)), dec!(0.35)),
                bracket(dec!(731200), None, dec!(0.37)),
            ],
        },
        married_filing_separately: RateSchedule {
            standard_deduction: dec!(14600),
            brackets: vec![
                bracket(dec!(0), Some(dec!(11600)), dec!(0.10)),
                bracket(dec!(11600), Some(dec!(47150)), dec!(0.12)),
                bracket(dec!(47150), Some(dec!(100525)), dec!(0.22)),
                bracket(dec!(100525), Some(dec!(191950)), dec!(0.24)),
                bracket(dec!(191950), Some(dec!(243725)), dec!(0.32)),
                bracket(dec!(243725), Some(dec!(365600)), dec!(0.35)),
                bracket(dec!(365600), None, dec!(0.37)),
            ],
        },
        head_of_household: RateSchedule {
            standard_deduction: dec!(21900),
            brackets: vec![
                bracket(dec!(0), Some(dec!(16550)), dec!(0.10)),
                bracket(dec!(16550), Some(dec!(63100)), dec!(0.12)),
                bracket(dec!(63100), Some(dec!(100500)), dec!(0.22)),
                bracket(dec!(100500), Some(dec!(191950)), dec!(0.24)),
                bracket(dec!(191950), Some(dec!(243700)), dec!(0.32)),
                bracket(dec!(243700), Some(dec!(609350)), dec!(0.35)),
                bracket(dec!(609350), None, dec!(0.37)),
            ],
        },
    }
}
