use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FilingStatus, TaxBracket};

/// Errors raised when a tax year table fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTableError {
    /// A filing status has no brackets at all.
    #[error("no tax brackets configured for {status}")]
    MissingBrackets { status: FilingStatus },

    /// The lowest bracket does not start at zero income.
    #[error("the first bracket for {status} must start at 0, found {min_income}")]
    FirstBracketNotZero {
        status: FilingStatus,
        min_income: Decimal,
    },

    /// A bracket below the top one has no upper bound.
    #[error("bracket starting at {min_income} for {status} is unbounded but not the top bracket")]
    UnboundedBracketBelowTop {
        status: FilingStatus,
        min_income: Decimal,
    },

    /// Adjacent brackets leave a gap or overlap.
    #[error(
        "brackets for {status} are not contiguous: expected a bracket starting at {expected}, found {found}"
    )]
    NonContiguousBrackets {
        status: FilingStatus,
        expected: Decimal,
        found: Decimal,
    },

    /// The top bracket has an upper bound, leaving high incomes uncovered.
    #[error("the top bracket for {status} must have no upper bound")]
    BoundedTopBracket { status: FilingStatus },

    /// A bracket rate is outside (0, 1).
    #[error("bracket rate for {status} must be between 0 and 1 exclusive, got {rate}")]
    InvalidRate { status: FilingStatus, rate: Decimal },

    /// Bracket rates do not strictly increase with income.
    #[error("bracket rates for {status} must be strictly increasing, got {rate} after {previous}")]
    NonIncreasingRate {
        status: FilingStatus,
        previous: Decimal,
        rate: Decimal,
    },

    /// A standard deduction is negative.
    #[error("standard deduction for {status} must be non-negative, got {amount}")]
    InvalidStandardDeduction {
        status: FilingStatus,
        amount: Decimal,
    },
}

/// Standard deduction and bracket list for one filing status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub standard_deduction: Decimal,
    pub brackets: Vec<TaxBracket>,
}

/// Frozen reference data for one tax year.
///
/// The table is read-only once constructed; supporting a different tax year
/// means building a new table, not editing this one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearTable {
    pub tax_year: i32,
    pub single: RateSchedule,
    pub married_filing_jointly: RateSchedule,
    pub married_filing_separately: RateSchedule,
    pub head_of_household: RateSchedule,
}

impl TaxYearTable {
    /// Returns the rate schedule for a filing status.
    pub fn schedule(&self, status: FilingStatus) -> &RateSchedule {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.married_filing_jointly,
            FilingStatus::MarriedFilingSeparately => &self.married_filing_separately,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }

    /// Returns the standard deduction for a filing status.
    pub fn standard_deduction(&self, status: FilingStatus) -> Decimal {
        self.schedule(status).standard_deduction
    }

    /// Returns the brackets for a filing status, ascending by `min_income`.
    pub fn brackets(&self, status: FilingStatus) -> &[TaxBracket] {
        &self.schedule(status).brackets
    }

    /// Validates every rate schedule in the table.
    ///
    /// Each schedule must be non-empty, start at zero income, be contiguous
    /// with no gaps or overlaps, end in a single unbounded top bracket, and
    /// carry rates in (0, 1) that strictly increase with income.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaxTableError`] encountered, scanning statuses in
    /// [`FilingStatus::ALL`] order.
    pub fn validate(&self) -> Result<(), TaxTableError> {
        for status in FilingStatus::ALL {
            self.validate_schedule(status)?;
        }
        Ok(())
    }

    fn validate_schedule(&self, status: FilingStatus) -> Result<(), TaxTableError> {
        let schedule = self.schedule(status);

        if schedule.standard_deduction < Decimal::ZERO {
            return Err(TaxTableError::InvalidStandardDeduction {
                status,
                amount: schedule.standard_deduction,
            });
        }

        let Some(first) = schedule.brackets.first() else {
            return Err(TaxTableError::MissingBrackets { status });
        };
        if first.min_income != Decimal::ZERO {
            return Err(TaxTableError::FirstBracketNotZero {
                status,
                min_income: first.min_income,
            });
        }

        let mut previous: Option<&TaxBracket> = None;
        for bracket in &schedule.brackets {
            if bracket.rate <= Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(TaxTableError::InvalidRate {
                    status,
                    rate: bracket.rate,
                });
            }
            if let Some(previous) = previous {
                let Some(expected) = previous.max_income else {
                    return Err(TaxTableError::UnboundedBracketBelowTop {
                        status,
                        min_income: previous.min_income,
                    });
                };
                if bracket.min_income != expected {
                    return Err(TaxTableError::NonContiguousBrackets {
                        status,
                        expected,
                        found: bracket.min_income,
                    });
                }
                if bracket.rate <= previous.rate {
                    return Err(TaxTableError::NonIncreasingRate {
                        status,
                        previous: previous.rate,
                        rate: bracket.rate,
                    });
                }
            }
            previous = Some(bracket);
        }

        if let Some(last) = previous {
            if last.max_income.is_some() {
                return Err(TaxTableError::BoundedTopBracket { status });
            }
        }

        Ok(())
    }
}
