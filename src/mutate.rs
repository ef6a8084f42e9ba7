//! Insertion, assignment, and removal.
//!
//! Each operation validates, consults the capacity policy, moves bytes, and
//! only then updates the size.

use crate::error::U8VecError;
use crate::vector::U8Vec;

impl U8Vec {
    /// Appends an element. O(1) amortized.
    ///
    /// # Errors
    ///
    /// - `U8VecError::NotInitialized` if `setup` has not been called
    /// - `U8VecError::InvalidArgument` if the element size is zero
    /// - `U8VecError::ElementSizeMismatch` if `element.len() != element_size()`
    /// - `U8VecError::AllocationError` if growing the buffer fails
    pub fn push_back(&mut self, element: &[u8]) -> Result<(), U8VecError> {
        self.check_usable()?;
        self.check_element(element)?;
        self.grow_if_full()?;

        self.write_slot(self.size, element)?;
        self.size += 1;
        Ok(())
    }

    /// Inserts an element at the front, shifting everything right. O(n).
    ///
    /// # Errors
    ///
    /// Same as [`U8Vec::insert`].
    pub fn push_front(&mut self, element: &[u8]) -> Result<(), U8VecError> {
        self.insert(0, element)
    }

    /// Inserts an element at `index`, shifting `[index, len())` one slot right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// - `U8VecError::OutOfRange` if `index > len()`
    /// - plus everything [`U8Vec::push_back`] reports
    pub fn insert(&mut self, index: usize, element: &[u8]) -> Result<(), U8VecError> {
        contract!(index <= self.size, "insert index beyond end");
        self.check_usable()?;
        self.check_element(element)?;
        if index > self.size {
            return Err(U8VecError::OutOfRange {
                index,
                length: self.size,
            });
        }
        self.grow_if_full()?;

        self.shift_right(index)?;
        self.write_slot(index, element)?;
        self.size += 1;
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }

    /// Overwrites the element at `index` in place.
    ///
    /// # Errors
    ///
    /// - `U8VecError::OutOfRange` if `index >= len()`
    /// - `U8VecError::NotInitialized`, `U8VecError::InvalidArgument`, or
    ///   `U8VecError::ElementSizeMismatch` as for [`U8Vec::push_back`]
    pub fn assign(&mut self, index: usize, element: &[u8]) -> Result<(), U8VecError> {
        contract!(index < self.size, "assign index out of range");
        self.check_usable()?;
        self.check_element(element)?;
        if index >= self.size {
            return Err(U8VecError::OutOfRange {
                index,
                length: self.size,
            });
        }
        self.write_slot(index, element)
    }

    /// Drops the last element. The bytes are not erased.
    ///
    /// # Errors
    ///
    /// - `U8VecError::OutOfRange` if the vector is empty
    /// - `U8VecError::NotInitialized` or `U8VecError::InvalidArgument`
    pub fn pop_back(&mut self) -> Result<(), U8VecError> {
        contract!(self.size > 0, "pop_back on an empty vector");
        self.check_usable()?;
        if self.size == 0 {
            return Err(U8VecError::OutOfRange {
                index: 0,
                length: 0,
            });
        }

        self.size -= 1;
        self.shrink_if_sparse();
        Ok(())
    }

    /// Removes the first element, shifting everything left. O(n).
    ///
    /// # Errors
    ///
    /// Same as [`U8Vec::remove`].
    pub fn pop_front(&mut self) -> Result<(), U8VecError> {
        self.remove(0)
    }

    /// Removes the element at `index`, shifting `(index, len())` one slot left.
    ///
    /// # Errors
    ///
    /// - `U8VecError::OutOfRange` if `index >= len()`
    /// - `U8VecError::NotInitialized` or `U8VecError::InvalidArgument`
    pub fn remove(&mut self, index: usize) -> Result<(), U8VecError> {
        contract!(index < self.size, "remove index out of range");
        self.check_usable()?;
        if index >= self.size {
            return Err(U8VecError::OutOfRange {
                index,
                length: self.size,
            });
        }

        self.shift_left(index)?;
        self.size -= 1;
        self.generation = self.generation.wrapping_add(1);
        self.shrink_if_sparse();
        Ok(())
    }

    /// Removes all elements; same as `resize(0)`.
    ///
    /// Capacity falls toward the minimum, but only `shrink_to_fit` afterwards
    /// guarantees reaching it.
    ///
    /// # Errors
    ///
    /// Same as [`U8Vec::resize`].
    pub fn clear(&mut self) -> Result<(), U8VecError> {
        self.resize(0)
    }

    fn grow_if_full(&mut self) -> Result<(), U8VecError> {
        if self.policy.should_grow(self.size, self.capacity()) {
            self.adjust_capacity()?;
        }
        Ok(())
    }

    // A failed shrink keeps the larger buffer; the removal itself has already happened.
    fn shrink_if_sparse(&mut self) {
        if cfg!(feature = "no-shrink") {
            return;
        }
        if self.policy.should_shrink(self.size, self.capacity()) {
            if let Err(error) = self.adjust_capacity() {
                tracing::warn!("Shrink after removal failed: {}", error);
            }
        }
    }

    fn buffer_mut(&mut self) -> Result<&mut [u8], U8VecError> {
        self.buffer.as_deref_mut().ok_or(U8VecError::NotInitialized)
    }

    fn write_slot(&mut self, index: usize, element: &[u8]) -> Result<(), U8VecError> {
        let range = self.slot_range(index);
        let capacity = self.capacity();
        self.buffer_mut()?
            .get_mut(range)
            .ok_or(U8VecError::OutOfRange {
                index,
                length: capacity,
            })?
            .copy_from_slice(element);
        Ok(())
    }

    /// Opens a hole at `index` by moving `[index, size)` up one slot.
    fn shift_right(&mut self, index: usize) -> Result<(), U8VecError> {
        let width = self.element_size;
        let start = index * width;
        let end = self.size * width;
        let buffer = self.buffer_mut()?;
        if end + width > buffer.len() {
            return Err(U8VecError::OutOfRange {
                index: end / width,
                length: buffer.len() / width,
            });
        }
        buffer.copy_within(start..end, start + width);
        Ok(())
    }

    /// Closes the slot at `index` by moving `(index, size)` down one slot.
    fn shift_left(&mut self, index: usize) -> Result<(), U8VecError> {
        let width = self.element_size;
        let start = (index + 1) * width;
        let end = self.size * width;
        let buffer = self.buffer_mut()?;
        buffer.copy_within(start..end, start - width);
        Ok(())
    }
}
