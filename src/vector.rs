use alloc::boxed::Box;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::config::VecConfig;
use crate::cursor::{Cursor, CursorTarget};
use crate::error::U8VecError;
use crate::iter::{U8VecIter, U8VecRevIter};
use crate::policy::CapacityPolicy;

/// A growable vector of fixed-width, type-erased elements.
///
/// Every element is an opaque run of `element_size` bytes. The vector starts
/// uninitialized; `setup` allocates the buffer and `destroy` releases it.
#[derive(Debug, Default)]
pub struct U8Vec {
    pub(crate) buffer: Option<Box<[u8]>>,
    pub(crate) size: usize,
    capacity: usize,
    pub(crate) element_size: usize,
    pub(crate) policy: CapacityPolicy,
    pub(crate) generation: u64,
    pub(crate) instance: usize,
    reallocations: u64,
}

// Zero is reserved for "no buffer".
static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(1);

/// Allocates a zeroed buffer of exactly `slots * element_size` bytes.
fn allocate(slots: usize, element_size: usize) -> Result<Box<[u8]>, U8VecError> {
    let Some(bytes) = slots.checked_mul(element_size) else {
        return Err(U8VecError::CapacityOverflow {
            slots,
            element_size,
        });
    };
    let mut data = Vec::new();
    if data.try_reserve_exact(bytes).is_err() {
        return Err(U8VecError::AllocationError { bytes });
    }
    data.resize(bytes, 0);
    Ok(data.into_boxed_slice())
}

impl U8Vec {
    /// Creates an uninitialized vector with the default configuration.
    ///
    /// No memory is allocated until `setup` is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an uninitialized vector with a custom capacity policy.
    ///
    /// # Errors
    ///
    /// Returns `U8VecError::InvalidConfiguration` if `config` does not validate.
    pub fn with_config(config: VecConfig) -> Result<Self, U8VecError> {
        config.validate()?;
        Ok(Self {
            policy: CapacityPolicy::new(config),
            ..Self::default()
        })
    }

    /// Creates and sets up a vector in one step.
    ///
    /// # Errors
    ///
    /// Same as [`U8Vec::setup`].
    pub fn with_capacity(capacity_hint: usize, element_size: usize) -> Result<Self, U8VecError> {
        let mut vector = Self::new();
        vector.setup(capacity_hint, element_size)?;
        Ok(vector)
    }

    /// Allocates room for `max(minimum_capacity, capacity_hint)` elements.
    ///
    /// # Errors
    ///
    /// - `U8VecError::AlreadyInitialized` if the vector already owns a buffer
    /// - `U8VecError::CapacityOverflow` if the byte count overflows `usize`
    /// - `U8VecError::AllocationError` if the allocator refuses the request
    pub fn setup(&mut self, capacity_hint: usize, element_size: usize) -> Result<(), U8VecError> {
        contract!(!self.is_initialized(), "setup on an initialized vector");
        if self.is_initialized() {
            return Err(U8VecError::AlreadyInitialized);
        }

        let capacity = self.policy.initial_capacity(capacity_hint);
        let buffer = allocate(capacity, element_size)?;

        self.buffer = Some(buffer);
        self.size = 0;
        self.capacity = capacity;
        self.element_size = element_size;
        self.generation = self.generation.wrapping_add(1);
        self.instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(capacity, element_size, "vector set up");
        Ok(())
    }

    /// Releases the buffer and returns the vector to the uninitialized state.
    ///
    /// # Errors
    ///
    /// Returns `U8VecError::NotInitialized` if there is no buffer to release.
    pub fn destroy(&mut self) -> Result<(), U8VecError> {
        contract!(self.is_initialized(), "destroy on an uninitialized vector");
        if self.buffer.take().is_none() {
            return Err(U8VecError::NotInitialized);
        }

        tracing::trace!(capacity = self.capacity, "vector destroyed");
        self.size = 0;
        self.capacity = 0;
        self.element_size = 0;
        self.generation = self.generation.wrapping_add(1);
        self.instance = 0;
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.buffer.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Bytes occupied by live elements.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.size * self.element_size
    }

    /// Slots available before the next growth.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity - self.size
    }

    #[must_use]
    pub fn config(&self) -> &VecConfig {
        self.policy.config()
    }

    /// Counter bumped by every reallocation and every shift of elements.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of successful reallocations since construction.
    #[must_use]
    pub fn reallocation_count(&self) -> u64 {
        self.reallocations
    }

    /// The live elements as one contiguous byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let byte_size = self.byte_size();
        self.buffer
            .as_deref()
            .and_then(|buffer| buffer.get(..byte_size))
            .unwrap_or(&[])
    }

    /// Checks that element operations are possible at all.
    pub(crate) fn check_usable(&self) -> Result<(), U8VecError> {
        contract!(self.is_initialized(), "vector is not initialized");
        contract!(self.element_size != 0, "element size is zero");
        if !self.is_initialized() {
            return Err(U8VecError::NotInitialized);
        }
        if self.element_size == 0 {
            return Err(U8VecError::InvalidArgument {
                reason: "element size is zero",
            });
        }
        Ok(())
    }

    pub(crate) fn check_element(&self, element: &[u8]) -> Result<(), U8VecError> {
        contract!(
            element.len() == self.element_size,
            "element slice does not match element size"
        );
        if element.len() != self.element_size {
            return Err(U8VecError::ElementSizeMismatch {
                expected: self.element_size,
                actual: element.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn slot_range(&self, index: usize) -> core::ops::Range<usize> {
        let start = index * self.element_size;
        start..start + self.element_size
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of range, the element size is
    /// zero, or the vector is not initialized.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.try_get(index).ok()
    }

    /// Tries to get the element at the specified index.
    ///
    /// # Errors
    ///
    /// - `U8VecError::NotInitialized` if there is no buffer
    /// - `U8VecError::InvalidArgument` if the element size is zero
    /// - `U8VecError::OutOfRange` if `index >= len()`
    pub fn try_get(&self, index: usize) -> Result<&[u8], U8VecError> {
        self.check_usable()?;
        if index >= self.size {
            return Err(U8VecError::OutOfRange {
                index,
                length: self.size,
            });
        }
        let range = self.slot_range(index);
        self.buffer
            .as_deref()
            .and_then(|buffer| buffer.get(range))
            .ok_or(U8VecError::NotInitialized)
    }

    /// Gets a mutable view of the element at the specified index.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        self.check_usable().ok()?;
        if index >= self.size {
            return None;
        }
        let range = self.slot_range(index);
        self.buffer.as_deref_mut()?.get_mut(range)
    }

    #[must_use]
    pub fn front(&self) -> Option<&[u8]> {
        self.get(0)
    }

    #[must_use]
    pub fn back(&self) -> Option<&[u8]> {
        self.get(self.size.checked_sub(1)?)
    }

    /// Replaces the buffer with one of `new_capacity` slots.
    ///
    /// Requests below the minimum capacity are clamped to it, or ignored when
    /// the capacity already sits at the floor. On failure the vector is left
    /// exactly as it was.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) -> Result<(), U8VecError> {
        if !self.is_initialized() {
            return Err(U8VecError::NotInitialized);
        }
        let Some(new_capacity) = self.policy.clamp(new_capacity, self.capacity) else {
            return Ok(());
        };
        if new_capacity == self.capacity {
            return Ok(());
        }

        let mut fresh = allocate(new_capacity, self.element_size)?;
        let kept = self.size.min(new_capacity) * self.element_size;
        if let Some(old) = self.buffer.as_deref() {
            fresh[..kept].copy_from_slice(&old[..kept]);
        }

        tracing::debug!(
            "Reallocating vector: {} -> {} slots of {} bytes",
            self.capacity,
            new_capacity,
            self.element_size
        );
        self.buffer = Some(fresh);
        self.capacity = new_capacity;
        self.generation = self.generation.wrapping_add(1);
        self.reallocations += 1;
        Ok(())
    }

    /// Reallocates to `size * growth_factor`, the target used by both growth and shrink.
    pub(crate) fn adjust_capacity(&mut self) -> Result<(), U8VecError> {
        let target = self.policy.adjusted_capacity(self.size, self.element_size)?;
        self.reallocate(target)
    }

    /// Grows the buffer to at least `minimum_capacity` slots. Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `U8VecError::NotInitialized`, `U8VecError::CapacityOverflow`, or
    /// `U8VecError::AllocationError`; the vector is unchanged on error.
    pub fn reserve(&mut self, minimum_capacity: usize) -> Result<(), U8VecError> {
        if !self.is_initialized() {
            return Err(U8VecError::NotInitialized);
        }
        if minimum_capacity > self.capacity {
            self.reallocate(minimum_capacity)?;
        }
        Ok(())
    }

    /// Shrinks the buffer to the current size, but not below the minimum capacity.
    ///
    /// # Errors
    ///
    /// Returns `U8VecError::NotInitialized` or `U8VecError::AllocationError`.
    pub fn shrink_to_fit(&mut self) -> Result<(), U8VecError> {
        self.reallocate(self.size)
    }

    /// Sets the size directly.
    ///
    /// Reallocates to `new_size * growth_factor` first when the new size does
    /// not fit, or when it falls to the shrink threshold of the current size.
    /// Slots exposed by growing hold unspecified bytes: assign before reading.
    ///
    /// # Errors
    ///
    /// Returns `U8VecError::NotInitialized`, `U8VecError::CapacityOverflow`, or
    /// `U8VecError::AllocationError`; the vector is unchanged on error.
    pub fn resize(&mut self, new_size: usize) -> Result<(), U8VecError> {
        if !self.is_initialized() {
            return Err(U8VecError::NotInitialized);
        }
        if self
            .policy
            .resize_requires_reallocation(new_size, self.size, self.capacity)
        {
            let target = self.policy.adjusted_capacity(new_size, self.element_size)?;
            self.reallocate(target)?;
        }

        self.size = new_size;
        contract!(self.size <= self.capacity, "size exceeds capacity");
        Ok(())
    }

    /// Returns a cursor positioned at `index`.
    ///
    /// `index == len()` is the one-past-the-end position. Returns `None` if
    /// `index > len()`, the element size is zero, or the vector is not initialized.
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Option<Cursor> {
        contract!(index <= self.size, "cursor index beyond end");
        self.check_usable().ok()?;
        if index > self.size {
            return None;
        }
        Some(Cursor::new(index, self.element_size, self.instance, self.generation))
    }

    #[must_use]
    pub fn begin(&self) -> Option<Cursor> {
        self.cursor_at(0)
    }

    #[must_use]
    pub fn end(&self) -> Option<Cursor> {
        self.cursor_at(self.size)
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> U8VecIter<'_> {
        self.into_iter()
    }

    /// Returns a reverse iterator over the elements.
    #[must_use]
    pub fn iter_rev(&self) -> U8VecRevIter<'_> {
        U8VecRevIter::new(self)
    }
}

impl CursorTarget for U8Vec {
    type Item<'a> = &'a [u8];

    fn instance(&self) -> usize {
        self.instance
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn element_size(&self) -> usize {
        self.element_size
    }

    fn item_at(&self, index: usize) -> Option<Self::Item<'_>> {
        self.get(index)
    }
}
