//! Canonical plain-vanilla option contract definition.
//!
//! [`VanillaOption`] stores side, strike, expiry, and exercise rights
//! ([`crate::core::ExerciseStyle`]: European/American). Validation rejects
//! non-positive strikes and non-positive or non-finite expiries before any
//! lattice work happens.

use serde::{Deserialize, Serialize};

use crate::core::{ExerciseStyle, Instrument, OptionType, PricingError};

/// Vanilla option contract.
///
/// This is the canonical input for the lattice engine: strike `K`, expiry `T`
/// in year fractions, option side, and exercise rights.
///
/// # Examples
/// ```
/// use crrtree::core::{ExerciseStyle, OptionType};
/// use crrtree::instruments::VanillaOption;
///
/// let option = VanillaOption {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
///     exercise: ExerciseStyle::European,
/// };
/// assert!(option.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VanillaOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level.
    pub strike: f64,
    /// Expiry in years.
    pub expiry: f64,
    /// Exercise style.
    pub exercise: ExerciseStyle,
}

impl VanillaOption {
    /// Builds a European call option.
    ///
    /// `strike` and `expiry` are interpreted in spot units and year fractions.
    pub fn european_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
            exercise: ExerciseStyle::European,
        }
    }

    /// Builds a European put option.
    pub fn european_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
            exercise: ExerciseStyle::European,
        }
    }

    /// Builds an American call option.
    ///
    /// # Examples
    /// ```
    /// use crrtree::core::OptionType;
    /// use crrtree::instruments::VanillaOption;
    ///
    /// let call = VanillaOption::american_call(100.0, 0.75);
    /// assert_eq!(call.option_type, OptionType::Call);
    /// ```
    pub fn american_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
            exercise: ExerciseStyle::American,
        }
    }

    /// Builds an American put option.
    pub fn american_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
            exercise: ExerciseStyle::American,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidConfiguration`] when:
    /// - `strike <= 0`
    /// - `expiry` is not finite
    ///
    /// A non-positive expiry is rejected by the engine itself (`dt <= 0`)
    /// before any tree work.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.strike > 0.0) {
            return Err(PricingError::InvalidConfiguration(
                "vanilla strike must be > 0".to_string(),
            ));
        }
        if !self.expiry.is_finite() {
            return Err(PricingError::InvalidConfiguration(
                "vanilla expiry must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for VanillaOption {
    fn instrument_type(&self) -> &str {
        "VanillaOption"
    }
}
