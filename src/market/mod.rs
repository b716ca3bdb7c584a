//! Market data container consumed by the lattice engine.
//!
//! A [`Market`] is a flat snapshot: spot, continuously compounded rate,
//! continuous dividend yield, and a single annualized volatility. The model
//! has no term structure or smile, so a flat volatility source is the whole
//! story here.

use serde::{Deserialize, Serialize};

use crate::core::PricingError;

/// Market snapshot used by the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Spot price.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Continuously compounded dividend yield.
    pub dividend_yield: f64,
    /// Flat annualized volatility.
    pub vol: f64,
}

impl Market {
    /// Starts a market builder.
    #[inline]
    pub fn builder() -> MarketBuilder {
        MarketBuilder::default()
    }
}

/// Builder for [`Market`].
#[derive(Debug, Clone, Default)]
pub struct MarketBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    dividend_yield: Option<f64>,
    vol: Option<f64>,
}

impl MarketBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the flat risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Sets the flat volatility.
    #[inline]
    pub fn flat_vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Validates and builds a [`Market`].
    ///
    /// Spot and volatility are required; rate and dividend yield default to
    /// zero. Volatility may be zero, in which case the engine rejects the
    /// degenerate lattice as an arbitrage violation rather than here.
    pub fn build(self) -> Result<Market, PricingError> {
        let spot = self.spot.ok_or_else(|| {
            PricingError::InvalidConfiguration("market spot is required".to_string())
        })?;
        if !(spot > 0.0) {
            return Err(PricingError::InvalidConfiguration(
                "market spot must be > 0".to_string(),
            ));
        }

        let vol = self.vol.ok_or_else(|| {
            PricingError::InvalidConfiguration("market flat_vol is required".to_string())
        })?;
        if !(vol >= 0.0) {
            return Err(PricingError::InvalidConfiguration(
                "market flat_vol must be >= 0".to_string(),
            ));
        }

        Ok(Market {
            spot,
            rate: self.rate.unwrap_or(0.0),
            dividend_yield: self.dividend_yield.unwrap_or(0.0),
            vol,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_rate_and_dividend_to_zero() {
        let market = Market::builder()
            .spot(100.0)
            .flat_vol(0.2)
            .build()
            .unwrap();
        assert_eq!(market.rate, 0.0);
        assert_eq!(market.dividend_yield, 0.0);
    }

    #[test]
    fn builder_requires_spot_and_vol() {
        assert!(Market::builder().flat_vol(0.2).build().is_err());
        assert!(Market::builder().spot(100.0).build().is_err());
        assert!(Market::builder().spot(-1.0).flat_vol(0.2).build().is_err());
        assert!(Market::builder().spot(100.0).flat_vol(-0.2).build().is_err());
    }
}
