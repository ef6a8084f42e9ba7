//! Growth and shrink decisions.
//!
//! The policy is pure arithmetic over slot counts; it never touches the buffer.

use crate::config::VecConfig;
use crate::error::U8VecError;

/// Capacity decisions derived from a [`VecConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    config: VecConfig,
}

impl CapacityPolicy {
    #[must_use]
    pub const fn new(config: VecConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &VecConfig {
        &self.config
    }

    /// Slot count allocated by `setup` for the given hint.
    #[must_use]
    pub fn initial_capacity(&self, capacity_hint: usize) -> usize {
        capacity_hint.max(self.config.minimum_capacity)
    }

    /// True when the next insertion needs a reallocation first.
    #[must_use]
    pub fn should_grow(&self, size: usize, capacity: usize) -> bool {
        contract!(size <= capacity, "size exceeds capacity");
        size == capacity
    }

    /// True when `size` sits exactly on the shrink threshold of `capacity`.
    #[must_use]
    pub fn should_shrink(&self, size: usize, capacity: usize) -> bool {
        contract!(size <= capacity, "size exceeds capacity");
        size == self.config.shrink_threshold.of(capacity)
    }

    /// Reallocation target computed from a size: `size * growth_factor`.
    ///
    /// # Errors
    ///
    /// Returns `U8VecError::CapacityOverflow` if the product does not fit in `usize`.
    pub fn adjusted_capacity(
        &self,
        size: usize,
        element_size: usize,
    ) -> Result<usize, U8VecError> {
        let Some(target) = size.checked_mul(self.config.growth_factor) else {
            return Err(U8VecError::CapacityOverflow {
                slots: size,
                element_size,
            });
        };
        Ok(target)
    }

    /// Whether `resize(new_size)` must reallocate before changing the size.
    ///
    /// Either the new size does not fit, or it falls at or below the shrink
    /// threshold relative to the current size.
    #[must_use]
    pub fn resize_requires_reallocation(
        &self,
        new_size: usize,
        size: usize,
        capacity: usize,
    ) -> bool {
        let threshold = self.config.shrink_threshold;
        let scaled_new = new_size.saturating_mul(threshold.denominator);
        let scaled_old = size.saturating_mul(threshold.numerator);
        new_size > capacity || scaled_new <= scaled_old
    }

    /// Applies the capacity floor to a requested slot count.
    ///
    /// Returns `None` when the request is below the floor and the current
    /// capacity is already at (or below) it, meaning the reallocation is a no-op.
    #[must_use]
    pub fn clamp(&self, requested: usize, current: usize) -> Option<usize> {
        let minimum = self.config.minimum_capacity;
        if requested >= minimum {
            Some(requested)
        } else if current > minimum {
            Some(minimum)
        } else {
            None
        }
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::new(VecConfig::default())
    }
}
