use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::credit::{estimate_credit_score, CreditScoreInput, CreditScoreResult};
use crate::currency::{convert_currency, CurrencyResult};
use crate::deposit::{compute_fd_maturity, compute_rd_maturity, DepositResult};
use crate::loan::{amortization_schedule, compare_loans, LoanComparison, LoanSummary, LoanTerms};
use crate::tax::{compute_gst, GstMode, GstResult};

use super::requests::*;
use super::{ApiError, AppState};

/// Unwrap a JSON body, turning extractor rejections into a 400
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidJson(rejection.body_text()))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn emi(
    payload: Result<Json<EmiRequest>, JsonRejection>,
) -> Result<Json<LoanSummary>, ApiError> {
    let req = body(payload)?;
    Ok(Json(req.terms().summary()))
}

pub async fn loan_compare(
    payload: Result<Json<LoanCompareRequest>, JsonRejection>,
) -> Result<Json<LoanComparison>, ApiError> {
    let req = body(payload)?;
    Ok(Json(compare_loans(
        &LoanTerms::new(req.p1, req.r1, req.m1),
        &LoanTerms::new(req.p2, req.r2, req.m2),
    )))
}

pub async fn amortization(
    payload: Result<Json<EmiRequest>, JsonRejection>,
) -> Result<Json<AmortizationResponse>, ApiError> {
    let terms = body(payload)?.terms();
    let schedule = amortization_schedule(terms.principal, terms.annual_rate_percent, terms.months)?;
    Ok(Json(AmortizationResponse {
        summary: terms.summary(),
        schedule,
    }))
}

pub async fn gst(
    payload: Result<Json<GstRequest>, JsonRejection>,
) -> Result<Json<GstResult>, ApiError> {
    let req = body(payload)?;
    let mode = GstMode::from_mode_str(&req.mode);
    Ok(Json(compute_gst(req.amount, req.gst_rate, mode)))
}

pub async fn fd(
    payload: Result<Json<FdRequest>, JsonRejection>,
) -> Result<Json<DepositResult>, ApiError> {
    let req = body(payload)?;
    req.validate()?;
    Ok(Json(compute_fd_maturity(
        req.principal,
        req.annual_rate,
        req.years,
        req.comp_per_year,
    )))
}

pub async fn rd(
    payload: Result<Json<RdRequest>, JsonRejection>,
) -> Result<Json<DepositResult>, ApiError> {
    let req = body(payload)?;
    Ok(Json(compute_rd_maturity(
        req.monthly_installment,
        req.annual_rate,
        req.months,
    )))
}

pub async fn currency(
    State(state): State<AppState>,
    payload: Result<Json<CurrencyRequest>, JsonRejection>,
) -> Result<Json<CurrencyResult>, ApiError> {
    let req = body(payload)?;
    let result = convert_currency(
        &state.reference.rates,
        req.amount,
        &req.from_code,
        &req.to_code,
        req.custom_rate,
    )?;
    Ok(Json(result))
}

pub async fn bank_holidays(State(state): State<AppState>) -> Json<HolidaysResponse> {
    let calendar = &state.reference.holidays;
    Json(HolidaysResponse {
        country: calendar.country().to_string(),
        year: calendar.year(),
        today: (state.today)(),
        holidays: calendar.holidays().to_vec(),
    })
}

pub async fn credit_score(
    payload: Result<Json<CreditScoreRequest>, JsonRejection>,
) -> Result<Json<CreditScoreResult>, ApiError> {
    let req = body(payload)?;
    let input = CreditScoreInput {
        payment_history_pct: req.payment_history_pct,
        utilization_pct: req.utilization_pct,
        credit_age_years: req.credit_age_years,
        inquiries: req.inquiries,
        dti_pct: req.dti_pct,
    };
    Ok(Json(estimate_credit_score(&input)))
}
