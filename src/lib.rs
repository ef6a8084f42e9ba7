#![no_std]

//! `U8Vec`: a growable vector of fixed-width, type-erased elements.
//!
//! The caller picks an element width once, at setup, and from then on stores
//! and retrieves opaque byte slices of exactly that width. Elements live
//! contiguously in a single owned buffer: element `i` occupies bytes
//! `[i * element_size, (i + 1) * element_size)`.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Performance Characteristics
//!
//! - `push_back()`, `pop_back()`: O(1) amortized
//! - `insert()`, `remove()`, `push_front()`, `pop_front()`: O(n) byte shift
//! - `get()`, `assign()`: O(1)
//! - any reallocation: O(n) copy of the live elements
//!
//! # Capacity Policy
//!
//! Growth and shrink are governed by a [`VecConfig`]:
//!
//! - when an insertion finds `len() == capacity()`, the buffer is reallocated to
//!   `len() * growth_factor` slots first
//! - when a removal leaves `len()` exactly on `shrink_threshold` of the capacity,
//!   the buffer is reallocated to `len() * growth_factor` slots
//! - capacity never drops below `minimum_capacity`
//!
//! ```
//! # use u8vec::U8Vec;
//! let mut vector = U8Vec::with_capacity(4, 4).unwrap();
//! for n in 1u32..=5 {
//!     vector.push_back(&n.to_le_bytes()).unwrap();
//! }
//!
//! assert_eq!(vector.len(), 5);
//! assert_eq!(vector.capacity(), 8);
//! assert_eq!(vector.get(4), Some(&5u32.to_le_bytes()[..]));
//! assert!(vector.get(5).is_none());
//! ```
//!
//! # Lifecycle
//!
//! A vector is created uninitialized and owns no memory until [`U8Vec::setup`].
//! [`U8Vec::destroy`] releases the buffer and returns the handle to the
//! uninitialized state; dropping the vector releases it too. Element
//! operations before `setup` return [`U8VecError::NotInitialized`], and a
//! second `setup` returns [`U8VecError::AlreadyInitialized`].
//!
//! ```
//! # use u8vec::U8Vec;
//! let mut vector = U8Vec::new();
//! assert!(!vector.is_initialized());
//!
//! vector.setup(16, 1).unwrap();
//! assert_eq!(vector.capacity(), 16);
//!
//! vector.destroy().unwrap();
//! assert!(!vector.is_initialized());
//!
//! vector.setup(0, 8).unwrap();
//! assert_eq!(vector.element_size(), 8);
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] values mark positions without borrowing the vector. Reallocation
//! and element shifting invalidate them; a stale cursor reads `None` instead of
//! stale memory.
//!
//! ```
//! # use u8vec::U8Vec;
//! let mut vector = U8Vec::with_capacity(4, 1).unwrap();
//! vector.push_back(b"a").unwrap();
//! vector.push_back(b"b").unwrap();
//!
//! let cursor = vector.begin().unwrap();
//! assert_eq!(cursor.get(&vector), Some(&b"a"[..]));
//!
//! vector.push_front(b"z").unwrap();
//! assert_eq!(cursor.get(&vector), None);
//! ```
//!
//! # Error Handling
//!
//! Every operation reports misuse (out-of-range indices, zero element width,
//! wrong element length, lifecycle errors) and allocation failure through
//! [`U8VecError`] or `None`. Enabling the `contracts` feature additionally
//! turns the same preconditions into debug assertions.
//!
//! # Typed Access
//!
//! [`TypedVec`] wraps a `U8Vec` for any `bytemuck::Pod` type.

extern crate alloc;

#[macro_use]
mod macros;

mod config;
mod cursor;
mod error;
mod iter;
mod mutate;
mod policy;
mod typed;
mod vector;

// Re-export public types and traits
pub use config::{Fraction, VecConfig};
pub use cursor::{Cursor, CursorTarget};
pub use error::U8VecError;
pub use iter::{U8VecIter, U8VecRevIter};
pub use policy::CapacityPolicy;
pub use typed::TypedVec;
pub use vector::U8Vec;
