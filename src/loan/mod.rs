//! Loan calculator: EMI, totals, comparison and amortization schedule

mod emi;
mod schedule;
pub mod batch;

pub use emi::{compare_loans, compute_emi, compute_loan_summary, LoanComparison, LoanSummary, LoanTerms};
pub use schedule::{amortization_schedule, AmortizationRow, MAX_SCHEDULE_MONTHS};
