//! Finite-difference Greeks built on the binomial tree engine.
//!
//! Every sensitivity is a central difference of full lattice revaluations;
//! nothing is read off the tree itself. One base valuation plus four up/down
//! pairs (spot, expiry, volatility, rate) makes nine engine calls per
//! estimate, all at the same step count with no adaptive refinement.
//!
//! Theta keeps the reference convention: the downward expiry bump is floored
//! at 1e-6 years, but the denominator stays `2 * bumps.time` even when that
//! floor bites. Short-dated theta therefore reproduces the reference numbers
//! rather than a symmetric-difference ideal.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{
    DiagKey, Diagnostics, Greeks, PricingEngine, PricingError, PricingResult,
};
use crate::engines::tree::BinomialTreeEngine;
use crate::instruments::vanilla::VanillaOption;
use crate::market::Market;

/// Floor applied to the downward expiry bump; keeps the bumped tree valid for
/// arbitrarily short-dated contracts.
const MIN_BUMPED_EXPIRY: f64 = 1e-6;

/// Perturbation sizes for the central-difference estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BumpSizes {
    /// Absolute spot bump.
    pub spot: f64,
    /// Absolute volatility bump.
    pub vol: f64,
    /// Expiry bump in years (`1/365` is a one-calendar-day bump).
    pub time: f64,
    /// Absolute rate bump.
    pub rate: f64,
}

impl Default for BumpSizes {
    fn default() -> Self {
        Self {
            spot: 0.01,
            vol: 0.01,
            time: 1.0 / 365.0,
            rate: 1e-4,
        }
    }
}

impl BumpSizes {
    fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot > 0.0 && self.vol > 0.0 && self.time > 0.0 && self.rate > 0.0) {
            return Err(PricingError::InvalidConfiguration(
                "finite-difference bumps must all be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Estimates price and Greeks by bump-and-reprice central differences.
///
/// Runs the lattice once at base inputs and eight more times with exactly one
/// input perturbed per call, then combines the prices:
///
/// - `delta = (up - dn) / (2 h_S)`, `gamma = (up - 2 base + dn) / h_S^2`
/// - `theta = -(t_up - t_dn) / (2 h_T)` with the downward expiry floored
/// - `vega = (v_up - v_dn) / (2 h_vol)`, `rho = (r_up - r_dn) / (2 h_r)`
///
/// With the `parallel` feature the eight bumped revaluations run on the rayon
/// pool; results are combined only after all have completed, so the output is
/// identical either way.
///
/// # Errors
/// Propagates any [`PricingError`] from the underlying engine calls unchanged
/// and returns no partial results; invalid (non-positive) bump sizes fail
/// before any pricing happens.
pub fn finite_difference_greeks(
    option: &VanillaOption,
    market: &Market,
    engine: &BinomialTreeEngine,
    bumps: BumpSizes,
) -> Result<PricingResult, PricingError> {
    bumps.validate()?;

    let price0 = engine.price(option, market)?.price;

    let spot_up = Market {
        spot: market.spot + bumps.spot,
        ..*market
    };
    let spot_dn = Market {
        spot: market.spot - bumps.spot,
        ..*market
    };
    let vol_up = Market {
        vol: market.vol + bumps.vol,
        ..*market
    };
    let vol_dn = Market {
        vol: market.vol - bumps.vol,
        ..*market
    };
    let rate_up = Market {
        rate: market.rate + bumps.rate,
        ..*market
    };
    let rate_dn = Market {
        rate: market.rate - bumps.rate,
        ..*market
    };
    let time_up = VanillaOption {
        expiry: option.expiry + bumps.time,
        ..*option
    };
    let time_dn = VanillaOption {
        expiry: (option.expiry - bumps.time).max(MIN_BUMPED_EXPIRY),
        ..*option
    };

    let scenarios: [(&VanillaOption, &Market); 8] = [
        (option, &spot_up),
        (option, &spot_dn),
        (&time_up, market),
        (&time_dn, market),
        (option, &vol_up),
        (option, &vol_dn),
        (option, &rate_up),
        (option, &rate_dn),
    ];

    #[cfg(feature = "parallel")]
    let prices = scenarios
        .par_iter()
        .map(|&(bumped_option, bumped_market)| {
            engine
                .price(bumped_option, bumped_market)
                .map(|result| result.price)
        })
        .collect::<Result<Vec<f64>, PricingError>>()?;

    #[cfg(not(feature = "parallel"))]
    let prices = scenarios
        .iter()
        .map(|&(bumped_option, bumped_market)| {
            engine
                .price(bumped_option, bumped_market)
                .map(|result| result.price)
        })
        .collect::<Result<Vec<f64>, PricingError>>()?;

    let (s_up, s_dn) = (prices[0], prices[1]);
    let (t_up, t_dn) = (prices[2], prices[3]);
    let (v_up, v_dn) = (prices[4], prices[5]);
    let (r_up, r_dn) = (prices[6], prices[7]);

    let delta = (s_up - s_dn) / (2.0 * bumps.spot);
    let gamma = (s_up - 2.0 * price0 + s_dn) / (bumps.spot * bumps.spot);
    // Market convention: theta is decay per year of remaining expiry. The
    // denominator is 2 * bumps.time even when time_dn was floored.
    let theta = -(t_up - t_dn) / (2.0 * bumps.time);
    let vega = (v_up - v_dn) / (2.0 * bumps.vol);
    let rho = (r_up - r_dn) / (2.0 * bumps.rate);

    let mut diagnostics = Diagnostics::new();
    diagnostics.insert(DiagKey::NumSteps, engine.steps as f64);

    Ok(PricingResult {
        price: price0,
        greeks: Some(Greeks {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }),
        diagnostics,
    })
}
