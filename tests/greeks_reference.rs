//! Finite-difference Greeks reference tests.
//!
//! Expected values pinned from a trusted run of the reference model with the
//! default bumps (h_S = 0.01, h_vol = 0.01, h_T = 1/365, h_r = 1e-4).
//!
//! Gamma tolerances are loose on purpose: dividing lattice-quantized price
//! differences by h_S^2 = 1e-4 amplifies rounding, so gamma is reproducible
//! but noisy. That noise is part of the pinned behaviour, not a defect.

use approx::assert_abs_diff_eq;
use crrtree::core::{ExerciseStyle, OptionType};
use crrtree::engines::tree::BinomialTreeEngine;
use crrtree::greeks::{finite_difference_greeks, BumpSizes};
use crrtree::instruments::VanillaOption;
use crrtree::market::Market;
use crrtree::pricing::binomial::binomial_greeks;

fn estimate(
    option: VanillaOption,
    spot: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    steps: usize,
) -> (f64, crrtree::core::Greeks) {
    let market = Market::builder()
        .spot(spot)
        .rate(rate)
        .dividend_yield(dividend_yield)
        .flat_vol(vol)
        .build()
        .expect("market build failed");
    let result = finite_difference_greeks(
        &option,
        &market,
        &BinomialTreeEngine::new(steps),
        BumpSizes::default(),
    )
    .expect("greeks estimation failed");
    (result.price, result.greeks.expect("greeks missing"))
}

#[test]
fn american_call_with_dividend_yield_matches_reference() {
    // S=100, K=100, T=0.75, r=0.04, vol=0.2, q=0.01, N=400.
    let (price, greeks) = estimate(
        VanillaOption::american_call(100.0, 0.75),
        100.0,
        0.04,
        0.01,
        0.20,
        400,
    );

    assert_abs_diff_eq!(price, 7.930_275_706_005_84, epsilon = 1.0e-8);
    assert_abs_diff_eq!(greeks.delta, 0.581_274_998_165_426_4, epsilon = 1.0e-6);
    assert_abs_diff_eq!(greeks.gamma, 3.865_472_582_305_074, epsilon = 5.0e-3);
    assert_abs_diff_eq!(greeks.theta, -5.890_085_012_061_228, epsilon = 1.0e-4);
    assert_abs_diff_eq!(greeks.vega, 33.475_163_234_942_51, epsilon = 1.0e-4);
    assert_abs_diff_eq!(greeks.rho, 37.647_917_771_419_515, epsilon = 1.0e-4);

    // Sanity bounds from the model itself.
    assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
    assert!(greeks.gamma > 0.0);
    assert!(greeks.vega > 0.0);
}

#[test]
fn european_put_matches_reference() {
    // S=100, K=100, T=1, r=0.05, vol=0.2, q=0, N=200.
    let (price, greeks) = estimate(
        VanillaOption::european_put(100.0, 1.0),
        100.0,
        0.05,
        0.0,
        0.20,
        200,
    );

    assert_abs_diff_eq!(price, 5.563_533_709_930_569, epsilon = 1.0e-8);
    assert_abs_diff_eq!(greeks.delta, -0.363_328_789_588_957, epsilon = 1.0e-6);
    assert_abs_diff_eq!(greeks.gamma, 5.300_047_771_088_501, epsilon = 5.0e-3);
    assert_abs_diff_eq!(greeks.theta, -1.652_882_793_414_203_2, epsilon = 1.0e-4);
    assert_abs_diff_eq!(greeks.vega, 37.473_947_892_493_07, epsilon = 1.0e-4);
    assert_abs_diff_eq!(greeks.rho, -41.896_413_593_636_16, epsilon = 1.0e-4);
}

#[test]
fn short_dated_theta_uses_unconditional_denominator() {
    // T = 0.002 is below the one-day bump, so the downward expiry clamps to
    // 1e-6 years while the denominator stays 2/365. The reference keeps that
    // asymmetry, and so do we: theta = -100.8332937... rather than the value
    // a symmetric difference would give.
    let (price, greeks) = estimate(
        VanillaOption::european_call(100.0, 0.002),
        100.0,
        0.05,
        0.0,
        0.20,
        200,
    );

    assert_abs_diff_eq!(price, 0.361_382_088_916_746, epsilon = 1.0e-8);
    assert_abs_diff_eq!(greeks.delta, 0.506_236_380_196_695_1, epsilon = 1.0e-6);
    assert_abs_diff_eq!(greeks.theta, -100.833_293_716_045_65, epsilon = 1.0e-3);
}

#[test]
fn deep_otm_greeks_vanish() {
    let (price, greeks) = estimate(
        VanillaOption::american_call(300.0, 0.1),
        100.0,
        0.03,
        0.0,
        0.10,
        200,
    );
    assert_eq!(price, 0.0);
    assert_eq!(greeks.delta, 0.0);
    assert_eq!(greeks.gamma, 0.0);
}

#[test]
fn flat_greeks_api_matches_engine_path() {
    let (price, greeks) = estimate(
        VanillaOption::american_put(100.0, 1.0),
        100.0,
        0.05,
        0.0,
        0.20,
        200,
    );
    let flat = binomial_greeks(
        OptionType::Put,
        ExerciseStyle::American,
        100.0,
        100.0,
        0.05,
        0.0,
        0.20,
        1.0,
        200,
        BumpSizes::default(),
    )
    .unwrap();

    assert_eq!(flat.price, price);
    let flat_greeks = flat.greeks.unwrap();
    assert_eq!(flat_greeks.delta, greeks.delta);
    assert_eq!(flat_greeks.theta, greeks.theta);
    assert_eq!(flat_greeks.rho, greeks.rho);
}
