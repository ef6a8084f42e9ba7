use crate::error::U8VecError;

const DEFAULT_GROWTH_FACTOR: usize = 2;
const DEFAULT_MINIMUM_CAPACITY: usize = 4;

/// A fraction `numerator / denominator`, evaluated with integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// Value above the line
    pub numerator: usize,
    /// Value below the line; zero makes the fraction evaluate to zero
    pub denominator: usize,
}

impl Fraction {
    /// One quarter, the default shrink threshold.
    pub const QUARTER: Self = Self::new(1, 4);

    #[must_use]
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `value * numerator / denominator`, rounded down.
    ///
    /// Saturates instead of overflowing; a zero denominator yields zero.
    #[must_use]
    pub fn of(&self, value: usize) -> usize {
        if self.denominator == 0 {
            return 0;
        }
        value.saturating_mul(self.numerator) / self.denominator
    }
}

/// Tuning constants for a vector's capacity policy.
///
/// Defaults: growth factor 2, shrink threshold 1/4, minimum capacity 4.
///
/// ```
/// # use u8vec::{Fraction, VecConfig};
/// let config = VecConfig::default()
///     .with_growth_factor(3)
///     .with_shrink_threshold(Fraction::new(1, 8))
///     .with_minimum_capacity(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VecConfig {
    /// Multiplier applied to the size when a reallocation target is computed.
    pub growth_factor: usize,
    /// Fraction of capacity at which a removal triggers a shrink.
    pub shrink_threshold: Fraction,
    /// Capacity never drops below this floor.
    pub minimum_capacity: usize,
}

impl Default for VecConfig {
    fn default() -> Self {
        Self {
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_threshold: Fraction::QUARTER,
            minimum_capacity: DEFAULT_MINIMUM_CAPACITY,
        }
    }
}

impl VecConfig {
    #[must_use]
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    #[must_use]
    pub fn with_shrink_threshold(mut self, shrink_threshold: Fraction) -> Self {
        self.shrink_threshold = shrink_threshold;
        self
    }

    #[must_use]
    pub fn with_minimum_capacity(mut self, minimum_capacity: usize) -> Self {
        self.minimum_capacity = minimum_capacity;
        self
    }

    /// Checks that the constants describe a usable policy.
    ///
    /// # Errors
    ///
    /// Returns `U8VecError::InvalidConfiguration` if:
    /// - `growth_factor` is less than 2 (growth would not make room)
    /// - `minimum_capacity` is 0
    /// - the shrink threshold has a zero numerator or denominator
    /// - `numerator * growth_factor > denominator` (a shrink would grow the buffer)
    pub fn validate(&self) -> Result<(), U8VecError> {
        if self.growth_factor < 2 {
            return Err(U8VecError::InvalidConfiguration {
                parameter: "growth_factor",
                value: self.growth_factor,
            });
        }
        if self.minimum_capacity == 0 {
            return Err(U8VecError::InvalidConfiguration {
                parameter: "minimum_capacity",
                value: self.minimum_capacity,
            });
        }
        let Fraction {
            numerator,
            denominator,
        } = self.shrink_threshold;
        if denominator == 0 {
            return Err(U8VecError::InvalidConfiguration {
                parameter: "shrink_threshold.denominator",
                value: denominator,
            });
        }
        if numerator == 0 {
            return Err(U8VecError::InvalidConfiguration {
                parameter: "shrink_threshold.numerator",
                value: numerator,
            });
        }
        if numerator.saturating_mul(self.growth_factor) > denominator {
            return Err(U8VecError::InvalidConfiguration {
                parameter: "shrink_threshold.numerator",
                value: numerator,
            });
        }
        Ok(())
    }
}
