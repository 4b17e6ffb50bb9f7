//! GST add/remove calculator

use log::debug;
use serde::{Deserialize, Serialize};

use crate::rounding::round2;

/// Direction of the GST calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GstMode {
    /// Amount is tax-exclusive; GST is added on top
    #[default]
    Add,
    /// Amount is tax-inclusive; GST is extracted from it
    Remove,
}

impl GstMode {
    /// Parse a wire mode string.
    ///
    /// Only the exact string `"add"` selects [`GstMode::Add`]. Anything else,
    /// including `"ADD"` or an empty string, falls back to [`GstMode::Remove`].
    pub fn from_mode_str(mode: &str) -> Self {
        match mode {
            "add" => GstMode::Add,
            _unrecognized => GstMode::Remove,
        }
    }
}

/// Base, tax and gross amounts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstResult {
    pub base: f64,
    pub gst: f64,
    pub gross: f64,
}

/// Add GST to a base amount or remove it from a gross amount
///
/// `gst_rate_percent` is a percentage (18 for 18%). All three outputs are
/// rounded to 2 decimals; in add mode `gross` is derived from the rounded tax,
/// in remove mode `gst` is derived from the rounded base.
pub fn compute_gst(amount: f64, gst_rate_percent: f64, mode: GstMode) -> GstResult {
    let rate = gst_rate_percent / 100.0;

    let result = match mode {
        GstMode::Add => {
            let gst = round2(amount * rate);
            GstResult {
                base: round2(amount),
                gst,
                gross: round2(amount + gst),
            }
        }
        GstMode::Remove => {
            let base = if rate != 0.0 {
                round2(amount / (1.0 + rate))
            } else {
                round2(amount)
            };
            GstResult {
                base,
                gst: round2(amount - base),
                gross: round2(amount),
            }
        }
    };

    debug!("gst {:?}: amount={} rate={}% -> {:?}", mode, amount, gst_rate_percent, result);
    result
}
