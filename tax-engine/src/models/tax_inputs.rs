use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DeductionType, FilingStatus};

/// Pre-tax contributions subtracted from gross income when computing AGI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreTaxContributions {
    pub retirement_401k: Decimal,
    pub hsa: Decimal,
    pub other: Decimal,
}

impl PreTaxContributions {
    pub fn total(&self) -> Decimal {
        self.retirement_401k + self.hsa + self.other
    }
}

/// User-provided values for one tax calculation.
///
/// Numeric fields are expected to be non-negative; validating raw form input
/// is the caller's responsibility, not the engine's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInputs {
    pub filing_status: FilingStatus,
    pub gross_income: Decimal,
    pub pre_tax_contributions: PreTaxContributions,
    pub deduction_type: DeductionType,
    /// Only consulted when `deduction_type` is [`DeductionType::Itemized`].
    pub itemized_deductions: Decimal,
    pub tax_credits: Decimal,
    pub tax_withheld: Decimal,
}
