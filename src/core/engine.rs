//! Engine abstractions, result payloads, and the crate error type.

use serde::{Deserialize, Serialize};

use crate::market::Market;

/// Standardized Greeks container used by estimator results.
///
/// The fields correspond to:
/// - `delta = dV/dS`
/// - `gamma = d²V/dS²`
/// - `vega = dV/dσ`
/// - `theta = -dV/dT` (decay per year of remaining expiry)
/// - `rho = dV/dr`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Common trait implemented by every priceable instrument.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics and bindings.
    fn instrument_type(&self) -> &str;
}

/// Pricing engine abstraction over an instrument type.
pub trait PricingEngine<I: Instrument> {
    /// Prices an instrument under the provided market state.
    fn price(&self, instrument: &I, market: &Market) -> Result<PricingResult, PricingError>;
}

/// Compact key set for engine diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagKey {
    /// Down-move factor `d = 1/u`.
    D,
    /// Per-step discount factor `exp(-r dt)`.
    DiscountFactor,
    /// Step length in years.
    Dt,
    /// Lattice step count.
    NumSteps,
    /// Risk-neutral up probability.
    Pu,
    /// Up-move factor `exp(sigma sqrt(dt))`.
    U,
}

impl DiagKey {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::D => "d",
            Self::DiscountFactor => "discount_factor",
            Self::Dt => "dt",
            Self::NumSteps => "num_steps",
            Self::Pu => "pu",
            Self::U => "u",
        }
    }
}

/// Inline diagnostics storage used in [`PricingResult`].
///
/// Fixed-capacity so a pricing call never allocates for bookkeeping. Inserting
/// an existing key overwrites it and returns the previous value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: [Option<(DiagKey, f64)>; 8],
}

impl Diagnostics {
    pub const CAPACITY: usize = 8;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries[0].is_none()
    }

    #[inline]
    pub fn insert(&mut self, key: DiagKey, value: f64) -> Option<f64> {
        for (entry_key, existing) in self.entries.iter_mut().flatten() {
            if *entry_key == key {
                let prev = *existing;
                *existing = value;
                return Some(prev);
            }
        }

        for entry in &mut self.entries {
            if entry.is_none() {
                *entry = Some((key, value));
                return None;
            }
        }

        panic!("diagnostics capacity exceeded ({})", Self::CAPACITY);
    }

    #[inline]
    pub fn get(&self, key: DiagKey) -> Option<f64> {
        self.entries
            .iter()
            .flatten()
            .find_map(|(entry_key, value)| (*entry_key == key).then_some(*value))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), *value))
    }
}

/// Unified result payload for pricing and Greeks calls.
#[derive(Debug, Clone)]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// Greeks when produced by the call (the plain pricer leaves this `None`).
    pub greeks: Option<Greeks>,
    /// Engine-specific scalar diagnostics.
    pub diagnostics: Diagnostics,
}

/// Errors surfaced by the lattice API.
///
/// Both variants are detected before or during tree setup, never mid-induction,
/// and no retries are performed internally; retry-with-larger-steps is a caller
/// decision.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// The step setup is unusable before any tree work: non-positive expiry or
    /// step count (`dt <= 0`), or a malformed contract/market/bump input.
    InvalidConfiguration(String),
    /// The derived risk-neutral probability left the open interval (0, 1), so
    /// the discretization admits arbitrage. Carries the offending value so the
    /// caller can judge how far off the configuration is.
    ArbitrageViolation { probability: f64 },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::ArbitrageViolation { probability } => write!(
                f,
                "arbitrage violation: risk-neutral probability p={probability:.4} is outside (0, 1); \
                 use more steps or check rate, dividend yield, and volatility"
            ),
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_insert_overwrites_existing_key() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert_eq!(diagnostics.insert(DiagKey::NumSteps, 200.0), None);
        assert_eq!(diagnostics.insert(DiagKey::NumSteps, 400.0), Some(200.0));
        assert_eq!(diagnostics.get(DiagKey::NumSteps), Some(400.0));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn diagnostics_iter_exposes_string_keys() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.insert(DiagKey::Pu, 0.5);
        diagnostics.insert(DiagKey::Dt, 0.005);
        let entries: Vec<_> = diagnostics.iter().collect();
        assert_eq!(entries, vec![("pu", 0.5), ("dt", 0.005)]);
    }

    #[test]
    fn arbitrage_violation_display_reports_probability() {
        let err = PricingError::ArbitrageViolation { probability: 6.972 };
        let msg = err.to_string();
        assert!(msg.contains("p=6.9720"), "unexpected message: {msg}");
    }
}
