//! Type-safe façade over [`U8Vec`].
//!
//! `TypedVec<T>` stores `T` values as `size_of::<T>()`-byte elements of an
//! inner `U8Vec`. The `Pod` bound means every byte pattern is a valid `T`, so
//! slots exposed by `resize` are readable without undefined behavior, and
//! values can be copied in and out of the unaligned byte buffer.

use core::marker::PhantomData;
use core::mem::size_of;

use alloc::vec::Vec;
use bytemuck::Pod;

use crate::config::VecConfig;
use crate::cursor::{Cursor, CursorTarget};
use crate::error::U8VecError;
use crate::vector::U8Vec;

/// A growable vector of `T` backed by a type-erased [`U8Vec`].
///
/// ```
/// # use u8vec::TypedVec;
/// let mut numbers = TypedVec::<u32>::with_capacity(4).unwrap();
/// for n in 1..=5 {
///     numbers.push_back(n).unwrap();
/// }
/// numbers.insert(0, 0).unwrap();
///
/// assert_eq!(numbers.get(0), Some(0));
/// assert_eq!(numbers.back(), Some(5));
/// assert_eq!(numbers.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
/// ```
#[derive(Debug)]
pub struct TypedVec<T: Pod> {
    raw: U8Vec,
    _marker: PhantomData<T>,
}

// Slot width equals size_of::<T>() by construction, so the read cannot fail.
fn read<T: Pod>(bytes: &[u8]) -> T {
    bytemuck::pod_read_unaligned(bytes)
}

impl<T: Pod> TypedVec<T> {
    /// Creates a vector with room for `max(minimum_capacity, capacity_hint)` values.
    ///
    /// # Errors
    ///
    /// - `U8VecError::InvalidArgument` if `T` is zero-sized
    /// - `U8VecError::AllocationError` or `U8VecError::CapacityOverflow` from setup
    pub fn with_capacity(capacity_hint: usize) -> Result<Self, U8VecError> {
        Self::with_config(capacity_hint, VecConfig::default())
    }

    /// Creates a vector with a custom capacity policy.
    ///
    /// # Errors
    ///
    /// As [`TypedVec::with_capacity`], plus `U8VecError::InvalidConfiguration`.
    pub fn with_config(capacity_hint: usize, config: VecConfig) -> Result<Self, U8VecError> {
        if size_of::<T>() == 0 {
            return Err(U8VecError::InvalidArgument {
                reason: "zero-sized element type",
            });
        }
        let mut raw = U8Vec::with_config(config)?;
        raw.setup(capacity_hint, size_of::<T>())?;
        Ok(Self {
            raw,
            _marker: PhantomData,
        })
    }

    /// Creates a vector holding a copy of `values`.
    ///
    /// # Errors
    ///
    /// As [`TypedVec::with_capacity`].
    pub fn from_slice(values: &[T]) -> Result<Self, U8VecError> {
        let mut vector = Self::with_capacity(values.len())?;
        for value in values {
            vector.push_back(*value)?;
        }
        Ok(vector)
    }

    /// The underlying type-erased vector.
    #[must_use]
    pub fn as_raw(&self) -> &U8Vec {
        &self.raw
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// # Errors
    ///
    /// `U8VecError::AllocationError` if growing fails.
    pub fn push_back(&mut self, value: T) -> Result<(), U8VecError> {
        self.raw.push_back(bytemuck::bytes_of(&value))
    }

    /// # Errors
    ///
    /// `U8VecError::AllocationError` if growing fails.
    pub fn push_front(&mut self, value: T) -> Result<(), U8VecError> {
        self.raw.push_front(bytemuck::bytes_of(&value))
    }

    /// # Errors
    ///
    /// `U8VecError::OutOfRange` if `index > len()`, or `U8VecError::AllocationError`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), U8VecError> {
        self.raw.insert(index, bytemuck::bytes_of(&value))
    }

    /// # Errors
    ///
    /// `U8VecError::OutOfRange` if `index >= len()`.
    pub fn assign(&mut self, index: usize, value: T) -> Result<(), U8VecError> {
        self.raw.assign(index, bytemuck::bytes_of(&value))
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// `U8VecError::OutOfRange` if the vector is empty.
    pub fn pop_back(&mut self) -> Result<T, U8VecError> {
        let index = self.len().checked_sub(1).ok_or(U8VecError::OutOfRange {
            index: 0,
            length: 0,
        })?;
        let value = read(self.raw.try_get(index)?);
        self.raw.pop_back()?;
        Ok(value)
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// `U8VecError::OutOfRange` if the vector is empty.
    pub fn pop_front(&mut self) -> Result<T, U8VecError> {
        self.remove(0)
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// `U8VecError::OutOfRange` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, U8VecError> {
        let value = read(self.raw.try_get(index)?);
        self.raw.remove(index)?;
        Ok(value)
    }

    /// # Errors
    ///
    /// `U8VecError::AllocationError` if a reallocation fails.
    pub fn clear(&mut self) -> Result<(), U8VecError> {
        self.raw.clear()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw.get(index).map(read)
    }

    #[must_use]
    pub fn front(&self) -> Option<T> {
        self.raw.front().map(read)
    }

    #[must_use]
    pub fn back(&self) -> Option<T> {
        self.raw.back().map(read)
    }

    /// Sets the length; exposed slots hold unspecified (but valid) values.
    ///
    /// # Errors
    ///
    /// `U8VecError::AllocationError` if a reallocation fails.
    pub fn resize(&mut self, new_size: usize) -> Result<(), U8VecError> {
        self.raw.resize(new_size)
    }

    /// # Errors
    ///
    /// `U8VecError::AllocationError` if growing fails.
    pub fn reserve(&mut self, minimum_capacity: usize) -> Result<(), U8VecError> {
        self.raw.reserve(minimum_capacity)
    }

    /// # Errors
    ///
    /// `U8VecError::AllocationError` if the reallocation fails.
    pub fn shrink_to_fit(&mut self) -> Result<(), U8VecError> {
        self.raw.shrink_to_fit()
    }

    #[must_use]
    pub fn begin(&self) -> Option<Cursor> {
        self.raw.begin()
    }

    #[must_use]
    pub fn end(&self) -> Option<Cursor> {
        self.raw.end()
    }

    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Option<Cursor> {
        self.raw.cursor_at(index)
    }

    /// Iterates over copies of the values in index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.raw.iter().map(read)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Pod> CursorTarget for TypedVec<T> {
    type Item<'a> = T;

    fn instance(&self) -> usize {
        self.raw.instance
    }

    fn generation(&self) -> u64 {
        self.raw.generation()
    }

    fn element_size(&self) -> usize {
        self.raw.element_size()
    }

    fn item_at(&self, index: usize) -> Option<Self::Item<'_>> {
        self.get(index)
    }
}
