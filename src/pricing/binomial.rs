//! Module `pricing::binomial`.
//!
//! Flat free-function entry points for callers that hold plain scalars and do
//! not want to assemble instrument/market/engine records themselves. Both
//! functions build the typed inputs, delegate to the engine or the Greeks
//! estimator, and surface the same errors.

use crate::core::{ExerciseStyle, OptionType, PricingEngine, PricingError, PricingResult};
use crate::engines::tree::BinomialTreeEngine;
use crate::greeks::{finite_difference_greeks, BumpSizes};
use crate::instruments::VanillaOption;
use crate::market::Market;

#[allow(clippy::too_many_arguments)]
fn assemble(
    option_type: OptionType,
    exercise: ExerciseStyle,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> Result<(VanillaOption, Market), PricingError> {
    let option = VanillaOption {
        option_type,
        strike,
        expiry,
        exercise,
    };
    let market = Market::builder()
        .spot(spot)
        .rate(rate)
        .dividend_yield(dividend_yield)
        .flat_vol(vol)
        .build()?;
    Ok((option, market))
}

/// Prices a vanilla option on a CRR lattice from plain scalar inputs.
///
/// Parameters:
/// - `spot`, `strike`: underlying and strike levels, same units.
/// - `rate`, `dividend_yield`: continuously compounded, per year.
/// - `vol`: annualized volatility.
/// - `expiry`: year fraction; must be strictly positive.
/// - `steps`: lattice depth ([`BinomialTreeEngine::DEFAULT_STEPS`] = 200 is a
///   reasonable default).
///
/// # Errors
/// Same failure modes as [`BinomialTreeEngine`]: [`PricingError::InvalidConfiguration`]
/// for an unusable step setup and [`PricingError::ArbitrageViolation`] when the
/// risk-neutral probability leaves (0, 1).
///
/// # Examples
/// ```rust
/// use crrtree::core::{ExerciseStyle, OptionType};
/// use crrtree::pricing::binomial::binomial_price;
///
/// let call = binomial_price(
///     OptionType::Call,
///     ExerciseStyle::European,
///     100.0, 100.0, 0.05, 0.0, 0.20, 1.0, 200,
/// )
/// .unwrap();
/// let put = binomial_price(
///     OptionType::Put,
///     ExerciseStyle::European,
///     100.0, 100.0, 0.05, 0.0, 0.20, 1.0, 200,
/// )
/// .unwrap();
/// assert!(call > put);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn binomial_price(
    option_type: OptionType,
    exercise: ExerciseStyle,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
) -> Result<f64, PricingError> {
    let (option, market) = assemble(
        option_type,
        exercise,
        spot,
        strike,
        rate,
        dividend_yield,
        vol,
        expiry,
    )?;
    let engine = BinomialTreeEngine::new(steps);
    Ok(engine.price(&option, &market)?.price)
}

/// Prices a vanilla option and estimates its Greeks from plain scalar inputs.
///
/// Delegates to [`finite_difference_greeks`]; the returned
/// [`PricingResult`] carries the base price and `greeks: Some(..)`.
///
/// # Errors
/// Propagates every pricing failure from the nine underlying lattice calls
/// unchanged; non-positive bump sizes fail before any pricing happens.
///
/// # Examples
/// ```rust
/// use crrtree::core::{ExerciseStyle, OptionType};
/// use crrtree::greeks::BumpSizes;
/// use crrtree::pricing::binomial::binomial_greeks;
///
/// let result = binomial_greeks(
///     OptionType::Put,
///     ExerciseStyle::American,
///     100.0, 100.0, 0.05, 0.0, 0.20, 1.0, 200,
///     BumpSizes::default(),
/// )
/// .unwrap();
/// let greeks = result.greeks.unwrap();
/// assert!(greeks.delta < 0.0 && greeks.vega > 0.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn binomial_greeks(
    option_type: OptionType,
    exercise: ExerciseStyle,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
    bumps: BumpSizes,
) -> Result<PricingResult, PricingError> {
    let (option, market) = assemble(
        option_type,
        exercise,
        spot,
        strike,
        rate,
        dividend_yield,
        vol,
        expiry,
    )?;
    let engine = BinomialTreeEngine::new(steps);
    finite_difference_greeks(&option, &market, &engine, bumps)
}
