//! Module `engines::tree::binomial`.
//!
//! Cox-Ross-Rubinstein binomial lattice for vanilla options with a continuous
//! dividend yield and an American/European exercise toggle.
//!
//! References: Cox-Ross-Rubinstein (1979), Hull (11th ed.) Ch. 13 and the
//! backward-induction recursion around Eq. (13.10).
//!
//! Numerical considerations: the node-level underlying price
//! `S * u^j * d^(i-j)` is recomputed from scratch at every node of every step
//! rather than carried forward multiplicatively. That keeps the arithmetic
//! aligned with the reference model it reproduces; convergence to the
//! continuous price is first-order in the step count.

use crate::core::{
    DiagKey, Diagnostics, ExerciseStyle, PricingEngine, PricingError, PricingResult,
};
use crate::instruments::vanilla::VanillaOption;
use crate::market::Market;

/// Cox-Ross-Rubinstein binomial tree engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTreeEngine {
    /// Number of tree steps.
    pub steps: usize,
}

impl BinomialTreeEngine {
    /// Default lattice depth; adequate for roughly 1e-3 relative accuracy on
    /// liquid vanilla parameters.
    pub const DEFAULT_STEPS: usize = 200;

    /// Creates a tree engine with the given number of steps.
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }
}

impl Default for BinomialTreeEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS)
    }
}

impl PricingEngine<VanillaOption> for BinomialTreeEngine {
    /// Prices a vanilla option by backward induction over the CRR lattice.
    ///
    /// # Errors
    /// - [`PricingError::InvalidConfiguration`] when `steps == 0` or the step
    ///   length `dt = expiry / steps` is not strictly positive.
    /// - [`PricingError::ArbitrageViolation`] when the risk-neutral up
    ///   probability is not strictly inside (0, 1); the offending value is
    ///   carried in the error so the caller can retry with more steps.
    fn price(
        &self,
        instrument: &VanillaOption,
        market: &Market,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;

        if self.steps == 0 {
            return Err(PricingError::InvalidConfiguration(
                "binomial steps must be >= 1".to_string(),
            ));
        }

        let steps = self.steps;
        let dt = instrument.expiry / steps as f64;
        if !(dt > 0.0) {
            return Err(PricingError::InvalidConfiguration(format!(
                "step length dt must be > 0 (expiry {expiry}, steps {steps})",
                expiry = instrument.expiry,
            )));
        }

        let u = (market.vol * dt.sqrt()).exp();
        let d = 1.0 / u;
        let growth = ((market.rate - market.dividend_yield) * dt).exp();
        let p = (growth - d) / (u - d);
        // Strict no-arbitrage bound: p == 0 or p == 1 is as degenerate as
        // leaving the interval. NaN (vol == 0 makes u == d) fails here too.
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(PricingError::ArbitrageViolation { probability: p });
        }

        let disc = (-market.rate * dt).exp();
        let one_minus_p = 1.0 - p;

        // Underlying level at node j of step i, recomputed fresh per node.
        let node_price =
            |i: usize, j: usize| market.spot * u.powi(j as i32) * d.powi((i - j) as i32);

        // Maturity layer: payoff at each reachable terminal price.
        let mut layer: Vec<f64> = (0..=steps)
            .map(|j| {
                instrument
                    .option_type
                    .intrinsic(node_price(steps, j), instrument.strike)
            })
            .collect();

        // Backward induction, replacing the whole layer at each step so the
        // step i+1 values are never touched once step i is built.
        for i in (0..steps).rev() {
            let mut rolled = Vec::with_capacity(i + 1);
            for j in 0..=i {
                let continuation = disc * (p * layer[j + 1] + one_minus_p * layer[j]);
                let value = match instrument.exercise {
                    ExerciseStyle::American => continuation.max(
                        instrument
                            .option_type
                            .intrinsic(node_price(i, j), instrument.strike),
                    ),
                    ExerciseStyle::European => continuation,
                };
                rolled.push(value);
            }
            layer = rolled;
        }

        let mut diagnostics = Diagnostics::new();
        diagnostics.insert(DiagKey::NumSteps, steps as f64);
        diagnostics.insert(DiagKey::Dt, dt);
        diagnostics.insert(DiagKey::U, u);
        diagnostics.insert(DiagKey::D, d);
        diagnostics.insert(DiagKey::Pu, p);
        diagnostics.insert(DiagKey::DiscountFactor, disc);

        Ok(PricingResult {
            price: layer[0],
            greeks: None,
            diagnostics,
        })
    }
}
