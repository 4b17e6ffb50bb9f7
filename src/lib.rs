//! fincalc - everyday financial calculators
//!
//! This library provides:
//! - Loan EMI, totals, comparison and amortization schedules
//! - GST add/remove
//! - Fixed and recurring deposit maturity
//! - A demo credit score heuristic (not a real scoring model)
//! - Currency conversion over a static rate table
//! - Static reference data (rates, bank holidays) and a JSON HTTP API
//!
//! Every calculator is a pure function of its inputs.

pub mod rounding;
pub mod error;
pub mod loan;
pub mod tax;
pub mod deposit;
pub mod credit;
pub mod currency;
pub mod reference;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use error::CalcError;
pub use loan::{compute_loan_summary, LoanSummary};
pub use tax::{compute_gst, GstMode, GstResult};
pub use deposit::{compute_fd_maturity, compute_rd_maturity, DepositResult};
pub use credit::{estimate_credit_score, CreditBand, CreditScoreInput, CreditScoreResult};
pub use currency::{convert_currency, CurrencyResult, RateSource};
pub use reference::ReferenceData;
