//! `crrtree` prices vanilla options on a Cox-Ross-Rubinstein binomial lattice
//! and estimates their sensitivities by central finite-difference bumps.
//!
//! The crate is deliberately small: one lattice engine, one finite-difference
//! Greeks estimator, and the plain data records they exchange. Both halves are
//! pure functions of their inputs with no I/O and no shared state.
//!
//! References:
//! - Cox, Ross and Rubinstein (1979), "Option Pricing: A Simplified Approach".
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13 for the
//!   lattice parameterization and backward induction, Ch. 19 for the Greeks.
//!
//! Numerical considerations:
//! - The risk-neutral probability must lie strictly inside (0, 1); outside that
//!   interval the discretization admits arbitrage and pricing fails with the
//!   offending value rather than returning a biased price. Retry with more
//!   steps or revisit the rate/dividend/volatility inputs.
//! - Greeks are full-revaluation central differences, not lattice read-offs, so
//!   gamma in particular inherits lattice oscillation at small spot bumps.
//!
//! # Feature Flags
//! - `parallel`: runs the eight bumped Greeks revaluations on the rayon pool.
//!
//! # Quick Start
//! Price an American call with a continuous dividend yield:
//! ```rust
//! use crrtree::core::{ExerciseStyle, OptionType};
//! use crrtree::pricing::binomial::binomial_price;
//!
//! let px = binomial_price(
//!     OptionType::Call,
//!     ExerciseStyle::American,
//!     100.0, // spot
//!     100.0, // strike
//!     0.04,  // rate
//!     0.01,  // dividend yield
//!     0.20,  // vol
//!     0.75,  // expiry in years
//!     400,   // lattice steps
//! )
//! .unwrap();
//! assert!(px > 7.5 && px < 8.5);
//! ```
//!
//! Compute Greeks by bump-and-reprice:
//! ```rust
//! use crrtree::engines::tree::BinomialTreeEngine;
//! use crrtree::greeks::{finite_difference_greeks, BumpSizes};
//! use crrtree::instruments::VanillaOption;
//! use crrtree::market::Market;
//!
//! let option = VanillaOption::american_call(100.0, 0.75);
//! let market = Market::builder()
//!     .spot(100.0)
//!     .rate(0.04)
//!     .dividend_yield(0.01)
//!     .flat_vol(0.20)
//!     .build()
//!     .unwrap();
//! let engine = BinomialTreeEngine::new(400);
//!
//! let result = finite_difference_greeks(&option, &market, &engine, BumpSizes::default()).unwrap();
//! let greeks = result.greeks.unwrap();
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//! assert!(greeks.vega > 0.0);
//! ```

pub mod core;
pub mod engines;
pub mod greeks;
pub mod instruments;
pub mod market;
pub mod pricing;

/// Convenience re-exports for callers that want the whole surface at once.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::engines::tree::*;
    pub use crate::greeks::*;
    pub use crate::instruments::*;
    pub use crate::market::*;
}
