pub mod calculations;
pub mod format;
pub mod models;
pub mod tables;

pub use calculations::{TaxEngine, calculate_tax};
pub use models::*;
