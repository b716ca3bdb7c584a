//! Direct functional pricing API over the lattice engine.

pub mod binomial;

pub use binomial::{binomial_greeks, binomial_price};
