// Misuse is reported through return values; with `contracts` enabled these panic instead.
#![cfg(not(feature = "contracts"))]

use u8vec::{U8Vec, U8VecError};

#[test]
fn test_double_setup() {
    let mut vector = U8Vec::with_capacity(4, 4).unwrap();
    assert_eq!(vector.setup(4, 4), Err(U8VecError::AlreadyInitialized));
    assert_eq!(vector.capacity(), 4);
}

#[test]
fn test_double_destroy() {
    let mut vector = U8Vec::with_capacity(4, 4).unwrap();
    vector.destroy().unwrap();
    assert_eq!(vector.destroy(), Err(U8VecError::NotInitialized));
}

#[test]
fn test_operations_on_uninitialized_vector() {
    let mut vector = U8Vec::new();

    assert_eq!(vector.push_back(b"x"), Err(U8VecError::NotInitialized));
    assert_eq!(vector.insert(0, b"x"), Err(U8VecError::NotInitialized));
    assert_eq!(vector.assign(0, b"x"), Err(U8VecError::NotInitialized));
    assert_eq!(vector.pop_back(), Err(U8VecError::NotInitialized));
    assert_eq!(vector.remove(0), Err(U8VecError::NotInitialized));
    assert_eq!(vector.reserve(10), Err(U8VecError::NotInitialized));
    assert_eq!(vector.resize(10), Err(U8VecError::NotInitialized));
    assert_eq!(vector.shrink_to_fit(), Err(U8VecError::NotInitialized));
    assert_eq!(vector.clear(), Err(U8VecError::NotInitialized));
    assert_eq!(vector.try_get(0), Err(U8VecError::NotInitialized));

    assert!(vector.get(0).is_none());
    assert!(vector.begin().is_none());
    assert!(vector.end().is_none());
}

#[test]
fn test_zero_element_width() {
    let mut vector = U8Vec::with_capacity(4, 0).unwrap();
    let expected = Err(U8VecError::InvalidArgument {
        reason: "element size is zero",
    });

    assert_eq!(vector.push_back(&[]), expected);
    assert_eq!(vector.insert(0, &[]), expected);
    assert_eq!(vector.assign(0, &[]), expected);
    assert_eq!(vector.pop_back(), expected);
    assert_eq!(vector.remove(0), expected);
    assert!(vector.try_get(0).is_err());
    assert!(vector.get(0).is_none());
    assert!(vector.begin().is_none());
    assert!(vector.cursor_at(0).is_none());
}

#[test]
fn test_element_size_mismatch() {
    let mut vector = U8Vec::with_capacity(4, 4).unwrap();

    assert_eq!(
        vector.push_back(&[1, 2, 3]),
        Err(U8VecError::ElementSizeMismatch {
            expected: 4,
            actual: 3,
        })
    );
    assert_eq!(
        vector.insert(0, &[1, 2, 3, 4, 5]),
        Err(U8VecError::ElementSizeMismatch {
            expected: 4,
            actual: 5,
        })
    );
    assert!(vector.is_empty());
}

#[test]
fn test_insert_past_end() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    vector.push_back(b"a").unwrap();
    vector.push_back(b"b").unwrap();

    assert_eq!(
        vector.insert(3, b"c"),
        Err(U8VecError::OutOfRange {
            index: 3,
            length: 2,
        })
    );
    assert_eq!(vector.as_bytes(), b"ab");
}

#[test]
fn test_assign_out_of_range() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    vector.push_back(b"a").unwrap();

    assert_eq!(
        vector.assign(1, b"z"),
        Err(U8VecError::OutOfRange {
            index: 1,
            length: 1,
        })
    );
    assert_eq!(vector.as_bytes(), b"a");
}

#[test]
fn test_remove_out_of_range() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    vector.push_back(b"a").unwrap();

    assert_eq!(
        vector.remove(1),
        Err(U8VecError::OutOfRange {
            index: 1,
            length: 1,
        })
    );
    assert_eq!(vector.len(), 1);
}

#[test]
fn test_pop_empty_vector() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();

    assert_eq!(
        vector.pop_back(),
        Err(U8VecError::OutOfRange {
            index: 0,
            length: 0,
        })
    );
    assert_eq!(
        vector.pop_front(),
        Err(U8VecError::OutOfRange {
            index: 0,
            length: 0,
        })
    );
}

#[test]
fn test_get_out_of_range() {
    let mut vector = U8Vec::with_capacity(4, 4).unwrap();
    for value in 1u32..=5 {
        vector.push_back(&value.to_le_bytes()).unwrap();
    }

    assert!(vector.get(5).is_none());
    assert_eq!(
        vector.try_get(5),
        Err(U8VecError::OutOfRange {
            index: 5,
            length: 5,
        })
    );
}

#[test]
fn test_cursor_past_end() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    vector.push_back(b"a").unwrap();

    assert!(vector.cursor_at(1).is_some());
    assert!(vector.cursor_at(2).is_none());
}

#[test]
fn test_mismatched_cursor_widths() {
    let narrow = U8Vec::with_capacity(4, 1).unwrap();
    let wide = U8Vec::with_capacity(4, 8).unwrap();

    let a = narrow.begin().unwrap();
    let b = wide.begin().unwrap();

    assert!(!a.equals(&b));
    assert!(!a.is_before(&b));
    assert!(!a.is_after(&b));
    assert_eq!(a.partial_cmp(&b), None);
    assert!(a.get(&wide).is_none());
}

#[test]
fn test_error_display() {
    assert_eq!(
        U8VecError::OutOfRange {
            index: 5,
            length: 5,
        }
        .to_string(),
        "Index out of range: index 5 is beyond vector length 5"
    );
    assert_eq!(
        U8VecError::ElementSizeMismatch {
            expected: 4,
            actual: 2,
        }
        .to_string(),
        "Element size mismatch: expected 4 bytes, got 2"
    );
    assert_eq!(
        U8VecError::NotInitialized.to_string(),
        "Vector is not initialized"
    );
}
