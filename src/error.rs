//! Error types for the calculators
//!
//! The currency converter and the amortization schedule can fail. Degenerate
//! loan/deposit inputs resolve to zero-valued results and credit-score inputs
//! are clamped.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A currency code is missing from the static rate table and no custom rate was given
    #[error("Unsupported currency in static table. Provide custom_rate or update server rates.")]
    UnsupportedCurrency { from: String, to: String },

    #[error("months must not exceed {max} for a schedule (got {months})")]
    ScheduleTooLong { months: i64, max: i64 },
}
