//! Request and response bodies for the JSON API
//!
//! Field names are the public wire contract and must not change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::deposit::DEFAULT_COMPOUNDING_PER_YEAR;
use crate::loan::{AmortizationRow, LoanSummary, LoanTerms};
use crate::reference::Holiday;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmiRequest {
    #[serde(default)]
    pub principal: f64,
    #[serde(default)]
    pub annual_rate_percent: f64,
    #[serde(default)]
    pub months: i64,
}

impl EmiRequest {
    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(self.principal, self.annual_rate_percent, self.months)
    }
}

#[derive(Debug, Deserialize)]
pub struct LoanCompareRequest {
    pub p1: f64,
    pub r1: f64,
    pub m1: i64,
    pub p2: f64,
    pub r2: f64,
    pub m2: i64,
}

#[derive(Debug, Serialize)]
pub struct AmortizationResponse {
    pub summary: LoanSummary,
    pub schedule: Vec<AmortizationRow>,
}

#[derive(Debug, Deserialize)]
pub struct GstRequest {
    pub amount: f64,
    pub gst_rate: f64,
    /// Only `"add"` adds tax; every other value removes it
    #[serde(default = "default_gst_mode")]
    pub mode: String,
}

fn default_gst_mode() -> String {
    "add".to_string()
}

#[derive(Debug, Deserialize)]
pub struct FdRequest {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: f64,
    #[serde(default = "default_comp_per_year")]
    pub comp_per_year: u32,
}

fn default_comp_per_year() -> u32 {
    DEFAULT_COMPOUNDING_PER_YEAR
}

impl FdRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.comp_per_year == 0 {
            return Err(ApiError::Validation(
                "comp_per_year must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct RdRequest {
    pub monthly_installment: f64,
    pub annual_rate: f64,
    pub months: i64,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyRequest {
    pub amount: f64,
    pub from_code: String,
    pub to_code: String,
    /// Units of `to_code` per unit of `from_code`
    #[serde(default)]
    pub custom_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CreditScoreRequest {
    pub payment_history_pct: f64,
    pub utilization_pct: f64,
    pub credit_age_years: f64,
    pub inquiries: i64,
    pub dti_pct: f64,
}

#[derive(Debug, Serialize)]
pub struct HolidaysResponse {
    pub country: String,
    pub year: i32,
    pub today: NaiveDate,
    pub holidays: Vec<Holiday>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emi_request_defaults_to_zero() {
        let req: EmiRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.terms(), LoanTerms::new(0.0, 0.0, 0));
    }

    #[test]
    fn test_gst_mode_defaults_to_add() {
        let req: GstRequest = serde_json::from_str(r#"{"amount": 100, "gst_rate": 5}"#).unwrap();
        assert_eq!(req.mode, "add");
    }

    #[test]
    fn test_fd_comp_default_and_validation() {
        let req: FdRequest =
            serde_json::from_str(r#"{"principal": 1, "annual_rate": 1, "years": 1}"#).unwrap();
        assert_eq!(req.comp_per_year, 4);
        assert!(req.validate().is_ok());

        let req: FdRequest = serde_json::from_str(
            r#"{"principal": 1, "annual_rate": 1, "years": 1, "comp_per_year": 0}"#,
        )
        .unwrap();
        assert!(matches!(req.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_custom_rate_null_is_none() {
        let req: CurrencyRequest = serde_json::from_str(
            r#"{"amount": 1, "from_code": "usd", "to_code": "inr", "custom_rate": null}"#,
        )
        .unwrap();
        assert!(req.custom_rate.is_none());
    }

    #[test]
    fn test_months_must_be_integer() {
        let result: Result<RdRequest, _> = serde_json::from_str(
            r#"{"monthly_installment": 100, "annual_rate": 7, "months": "twelve"}"#,
        );
        assert!(result.is_err());
    }
}
