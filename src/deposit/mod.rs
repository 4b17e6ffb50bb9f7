//! Deposit calculators: fixed deposit (lump sum) and recurring deposit (monthly installments)

mod fixed;
mod recurring;

pub use fixed::compute_fd_maturity;
pub use recurring::compute_rd_maturity;

use serde::{Deserialize, Serialize};

/// Quarterly compounding unless the caller says otherwise
pub const DEFAULT_COMPOUNDING_PER_YEAR: u32 = 4;

/// Maturity value and interest earned, both rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositResult {
    pub maturity: f64,
    pub interest: f64,
}

impl DepositResult {
    pub fn zero() -> Self {
        Self {
            maturity: 0.0,
            interest: 0.0,
        }
    }
}
