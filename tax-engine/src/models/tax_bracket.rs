use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One progressive-rate segment of a rate schedule.
///
/// `max_income` is `None` for the unbounded top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}
