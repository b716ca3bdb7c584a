//! Stable serde payloads for valuation inputs and outputs.
//!
//! [`ValuationAudit`] is the transport shape for one pricing or Greeks call:
//! the full set of scalar inputs next to the outputs they produced, so a
//! result can be reproduced or diffed later without guessing at defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::Greeks;
use crate::greeks::BumpSizes;
use crate::instruments::VanillaOption;
use crate::market::Market;

/// Inputs and outputs of a single valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationAudit {
    /// Contract terms.
    pub option: VanillaOption,
    /// Market snapshot the valuation used.
    pub market: Market,
    /// Lattice step count.
    pub steps: usize,
    /// Bump sizes, when the call produced Greeks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bumps: Option<BumpSizes>,
    /// Present value.
    pub price: f64,
    /// Greeks, when the call produced them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeks: Option<Greeks>,
}

/// Serializes any payload to pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a payload from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(json)
}
