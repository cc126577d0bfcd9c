use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionType {
    Standard,
    Itemized,
}

impl DeductionType {
    /// Display label for form-facing callers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Deduction",
            Self::Itemized => "Itemized Deductions",
        }
    }
}
