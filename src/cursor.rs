//! Explicit cursors over a vector's elements.
//!
//! A [`Cursor`] is a detached position: it holds no borrow of the vector, so
//! the vector can be mutated while cursors exist. Every cursor is stamped with
//! the identity of the vector's buffer and its generation at creation.
//! Reallocation and element shifting bump the generation. Reads through an
//! older cursor, or through a cursor made by another vector, return `None`.
//!
//! ```
//! # use u8vec::U8Vec;
//! let mut vector = U8Vec::with_capacity(4, 2).unwrap();
//! vector.push_back(b"ab").unwrap();
//! vector.push_back(b"cd").unwrap();
//!
//! let mut cursor = vector.begin().unwrap();
//! let end = vector.end().unwrap();
//! while cursor.is_before(&end) {
//!     println!("{:?}", cursor.next(&vector));
//! }
//! ```

use core::cmp::Ordering;

/// A container a [`Cursor`] can read from.
pub trait CursorTarget {
    /// What a read through a cursor yields.
    type Item<'a>
    where
        Self: 'a;

    /// Identity of the current buffer, unique per `setup`.
    fn instance(&self) -> usize;

    /// Current generation; cursors stamped with another value are stale.
    fn generation(&self) -> u64;

    /// Byte width of one element.
    fn element_size(&self) -> usize;

    /// The element at a logical index, if it exists.
    fn item_at(&self, index: usize) -> Option<Self::Item<'_>>;
}

/// A position inside (or one past the end of) a vector.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    index: usize,
    element_size: usize,
    instance: usize,
    generation: u64,
}

impl Cursor {
    pub(crate) fn new(index: usize, element_size: usize, instance: usize, generation: u64) -> Self {
        Self {
            index,
            element_size,
            instance,
            generation,
        }
    }

    /// Logical index of the position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the position within the buffer.
    #[must_use]
    pub fn byte_offset(&self) -> usize {
        self.index.wrapping_mul(self.element_size)
    }

    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// True if `target` is the vector that made the cursor and no reallocation
    /// or shift has happened since.
    #[must_use]
    pub fn is_valid_for<T: CursorTarget + ?Sized>(&self, target: &T) -> bool {
        self.instance == target.instance()
            && self.generation == target.generation()
            && self.element_size == target.element_size()
    }

    /// The element under the cursor, without moving.
    ///
    /// Returns `None` for stale cursors and for positions outside `[0, len())`.
    pub fn get<'a, T: CursorTarget + ?Sized>(&self, target: &'a T) -> Option<T::Item<'a>> {
        if !self.is_valid_for(target) {
            return None;
        }
        target.item_at(self.index)
    }

    /// Moves one element forward. No bounds checking.
    pub fn increment(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    /// Moves one element backward. No bounds checking.
    pub fn decrement(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }

    /// Reads the current element, then moves forward.
    pub fn next<'a, T: CursorTarget + ?Sized>(&mut self, target: &'a T) -> Option<T::Item<'a>> {
        let current = self.get(target);
        self.increment();
        current
    }

    /// Reads the current element, then moves backward.
    pub fn previous<'a, T: CursorTarget + ?Sized>(
        &mut self,
        target: &'a T,
    ) -> Option<T::Item<'a>> {
        let current = self.get(target);
        self.decrement();
        current
    }

    fn compatible(&self, other: &Self) -> bool {
        contract!(
            self.element_size == other.element_size,
            "comparing cursors of different element sizes"
        );
        self.element_size == other.element_size
    }

    /// Same position. Cursors of different element sizes never compare equal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.compatible(other) && self.index == other.index
    }

    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.compatible(other) && self.index < other.index
    }

    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.compatible(other) && self.index > other.index
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.index == other.index
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.element_size != other.element_size {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}
