use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// The portion of taxable income that fell into one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketBreakdown {
    pub bracket: TaxBracket,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
}

/// Result of one tax calculation.
///
/// `federal_tax_owed` is the post-credit liability; the `tax_amount` entries
/// in `bracket_breakdown` sum to the tax before credits, and the
/// `taxable_amount` entries sum to `taxable_income` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    pub gross_income: Decimal,
    pub adjusted_gross_income: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax_owed: Decimal,
    pub marginal_rate: Decimal,
    pub effective_rate: Decimal,
    pub refund_or_balance_due: Decimal,
    pub standard_deduction: Decimal,
    pub total_deductions: Decimal,
    pub bracket_breakdown: Vec<BracketBreakdown>,
}
