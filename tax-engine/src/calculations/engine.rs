//! Federal income tax calculation pipeline.
//!
//! This module implements a progressive-bracket income tax estimate for a
//! single tax year: adjusted gross income, the deduction election, taxable
//! income, per-bracket tax apportionment, credits, and the derived
//! marginal/effective rates.
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Adjusted gross income: gross income minus pre-tax contributions |
//! | 2    | Total deductions: standard, or the greater of standard and itemized |
//! | 3    | Taxable income: AGI minus total deductions, floored at zero |
//! | 4    | Bracket apportionment: tax accrued in each bracket touched |
//! | 5    | Credits: subtracted from tax, floored at zero |
//! | 6    | Marginal rate: rate of the bracket containing taxable income |
//! | 7    | Effective rate: tax after credits divided by AGI |
//! | 8    | Refund or balance due: withholding minus tax after credits |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::TaxEngine;
//! use tax_engine::models::{DeductionType, FilingStatus, PreTaxContributions, TaxInputs};
//! use tax_engine::tables;
//!
//! let table = tables::year_2024();
//! let engine = TaxEngine::new(&table);
//!
//! let inputs = TaxInputs {
//!     filing_status: FilingStatus::Single,
//!     gross_income: dec!(75000.00),
//!     pre_tax_contributions: PreTaxContributions {
//!         retirement_401k: dec!(22500.00),
//!         hsa: dec!(4150.00),
//!         other: dec!(0.00),
//!     },
//!     deduction_type: DeductionType::Standard,
//!     itemized_deductions: dec!(0.00),
//!     tax_credits: dec!(0.00),
//!     tax_withheld: dec!(12000.00),
//! };
//!
//! let result = engine.calculate(&inputs).unwrap();
//!
//! assert_eq!(result.adjusted_gross_income, dec!(48350.00));
//! assert_eq!(result.taxable_income, dec!(33750.00));
//! assert_eq!(result.federal_tax_owed, dec!(3818.00));
//! assert_eq!(result.marginal_rate, dec!(0.12));
//! assert_eq!(result.refund_or_balance_due, dec!(8182.00));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::max;
use crate::models::{
    BracketBreakdown, DeductionType, TaxBracket, TaxCalculation, TaxInputs, TaxTableError,
    TaxYearTable,
};

/// Calculator for a single tax year.
///
/// Borrows a [`TaxYearTable`] and computes one [`TaxCalculation`] per call.
/// The computation is deterministic and side-effect free, so one engine may
/// serve any number of calculations, concurrently or not.
#[derive(Debug, Clone)]
pub struct TaxEngine<'a> {
    table: &'a TaxYearTable,
}

/// Calculates a tax estimate for the given inputs and reference table.
///
/// Convenience wrapper around [`TaxEngine::calculate`].
///
/// # Errors
///
/// Returns [`TaxTableError`] if the reference table fails validation.
pub fn calculate_tax(
    inputs: &TaxInputs,
    table: &TaxYearTable,
) -> Result<TaxCalculation, TaxTableError> {
    TaxEngine::new(table).calculate(inputs)
}

impl<'a> TaxEngine<'a> {
    /// Creates an engine backed by the given reference table.
    pub fn new(table: &'a TaxYearTable) -> Self {
        Self { table }
    }

    /// Calculates the full tax estimate for one set of inputs.
    ///
    /// The pipeline is total for every input in the declared domain:
    /// negative adjusted gross income is tolerated (and logged), zero
    /// taxable income produces an empty breakdown, and credits never drive
    /// the liability below zero.
    ///
    /// # Errors
    ///
    /// Returns [`TaxTableError`] if the reference table fails validation.
    pub fn calculate(&self, inputs: &TaxInputs) -> Result<TaxCalculation, TaxTableError> {
        self.table.validate()?;

        let schedule = self.table.schedule(inputs.filing_status);

        // Step 1: AGI. May go negative when contributions exceed income;
        // the taxable income floor below absorbs it.
        let adjusted_gross_income = self.adjusted_gross_income(inputs);
        if adjusted_gross_income < Decimal::ZERO {
            warn!(
                agi = %adjusted_gross_income,
                gross_income = %inputs.gross_income,
                "pre-tax contributions exceed gross income; AGI is negative"
            );
        }

        // Step 2: deduction election.
        let total_deductions = self.total_deductions(inputs, schedule.standard_deduction);

        // Step 3: taxable income.
        let taxable_income = self.taxable_income(adjusted_gross_income, total_deductions);

        // Step 4: per-bracket apportionment; the entries sum to the tax
        // before credits.
        let bracket_breakdown = self.bracket_breakdown(taxable_income, &schedule.brackets);
        let tax_before_credits: Decimal = bracket_breakdown
            .iter()
            .map(|entry| entry.tax_amount)
            .sum();

        // Step 5: credits.
        let federal_tax_owed = self.tax_after_credits(tax_before_credits, inputs.tax_credits);

        // Steps 6 and 7: rates. The marginal rate depends only on taxable
        // income, not on credits.
        let marginal_rate = self.marginal_rate(taxable_income, &schedule.brackets);
        let effective_rate = self.effective_rate(federal_tax_owed, adjusted_gross_income);

        // Step 8: positive means refund, negative means balance due.
        let refund_or_balance_due = inputs.tax_withheld - federal_tax_owed;

        Ok(TaxCalculation {
            gross_income: inputs.gross_income,
            adjusted_gross_income,
            taxable_income,
            federal_tax_owed,
            marginal_rate,
            effective_rate,
            refund_or_balance_due,
            standard_deduction: schedule.standard_deduction,
            total_deductions,
            bracket_breakdown,
        })
    }

    /// Gross income minus pre-tax contributions (step 1). Not floored.
    fn adjusted_gross_income(&self, inputs: &TaxInputs) -> Decimal {
        inputs.gross_income - inputs.pre_tax_contributions.total()
    }

    /// Deduction election (step 2): the standard deduction, or for itemizers
    /// the greater of the standard and itemized amounts.
    ///
    /// Real tax law requires committing to one or the other; always taking
    /// the larger is this estimator's deliberate simplification, kept in
    /// this single place.
    fn total_deductions(
        &self,
        inputs: &TaxInputs,
        standard_deduction: Decimal,
    ) -> Decimal {
        match inputs.deduction_type {
            DeductionType::Standard => standard_deduction,
            DeductionType::Itemized => max(standard_deduction, inputs.itemized_deductions),
        }
    }

    /// Taxable income (step 3), floored at zero.
    fn taxable_income(
        &self,
        adjusted_gross_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(adjusted_gross_income - total_deductions, Decimal::ZERO)
    }

    /// Partitions taxable income across the bracket list (step 4).
    ///
    /// Brackets the income never reaches are omitted entirely rather than
    /// reported with zero amounts. A bracket is entered only when taxable
    /// income strictly exceeds its lower bound, so income sitting exactly on
    /// a boundary is attributed wholly to the bracket below it.
    fn bracket_breakdown(
        &self,
        taxable_income: Decimal,
        brackets: &[TaxBracket],
    ) -> Vec<BracketBreakdown> {
        let mut breakdown = Vec::new();

        for bracket in brackets {
            if taxable_income <= bracket.min_income {
                break;
            }

            let ceiling = match bracket.max_income {
                Some(max_income) => taxable_income.min(max_income),
                None => taxable_income,
            };
            let taxable_amount = ceiling - bracket.min_income;

            if taxable_amount > Decimal::ZERO {
                breakdown.push(BracketBreakdown {
                    bracket: bracket.clone(),
                    taxable_amount,
                    tax_amount: taxable_amount * bracket.rate,
                });
            }
        }

        breakdown
    }

    /// Rate of the bracket containing taxable income (step 6).
    ///
    /// Zero taxable income reports the lowest bracket's rate by convention.
    /// Unlike apportionment, the scan keeps a bracket when income sits
    /// exactly on its upper bound, so both agree on the bracket for income
    /// at a boundary. An empty bracket list reports a zero rate; the engine
    /// never passes one (the table is validated first).
    fn marginal_rate(
        &self,
        taxable_income: Decimal,
        brackets: &[TaxBracket],
    ) -> Decimal {
        let (Some(first), Some(last)) = (brackets.first(), brackets.last()) else {
            return Decimal::ZERO;
        };

        if taxable_income <= first.min_income {
            return first.rate;
        }

        brackets
            .iter()
            .find(|bracket| {
                taxable_income > bracket.min_income
                    && (bracket.max_income.is_none()
                        || taxable_income <= bracket.max_income.unwrap_or(Decimal::MAX))
            })
            // Income above every bounded bracket lands in the top one.
            .unwrap_or(last)
            .rate
    }

    /// Tax after credits (step 5), floored at zero.
    fn tax_after_credits(
        &self,
        tax_before_credits: Decimal,
        credits: Decimal,
    ) -> Decimal {
        max(tax_before_credits - credits, Decimal::ZERO)
    }

    /// Tax after credits divided by AGI (step 7); zero when AGI is not
    /// positive.
    fn effective_rate(
        &self,
        federal_tax_owed: Decimal,
        adjusted_gross_income: Decimal,
    ) -> Decimal {
        if adjusted_gross_income > Decimal::ZERO {
            federal_tax_owed / adjusted_gross_income
        } else {
            Decimal::ZERO
        }
    }
}
