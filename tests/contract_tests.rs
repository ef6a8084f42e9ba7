// With `contracts` on, precondition violations panic in debug builds.
#![cfg(all(feature = "contracts", debug_assertions))]

use u8vec::U8Vec;

#[test]
#[should_panic(expected = "insert index beyond end")]
fn test_insert_past_end_panics() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    let _ = vector.insert(5, b"a");
}

#[test]
#[should_panic(expected = "assign index out of range")]
fn test_assign_out_of_range_panics() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    vector.push_back(b"a").unwrap();
    let _ = vector.assign(1, b"b");
}

#[test]
#[should_panic(expected = "remove index out of range")]
fn test_remove_out_of_range_panics() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    vector.push_back(b"a").unwrap();
    let _ = vector.remove(1);
}

#[test]
#[should_panic(expected = "pop_back on an empty vector")]
fn test_pop_back_empty_panics() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    let _ = vector.pop_back();
}

#[test]
#[should_panic(expected = "setup on an initialized vector")]
fn test_double_setup_panics() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    let _ = vector.setup(4, 1);
}

#[test]
#[should_panic(expected = "destroy on an uninitialized vector")]
fn test_double_destroy_panics() {
    let mut vector = U8Vec::with_capacity(4, 1).unwrap();
    vector.destroy().unwrap();
    let _ = vector.destroy();
}

#[test]
#[should_panic(expected = "vector is not initialized")]
fn test_push_before_setup_panics() {
    let mut vector = U8Vec::new();
    let _ = vector.push_back(b"a");
}

#[test]
#[should_panic(expected = "element size is zero")]
fn test_zero_width_lookup_panics() {
    let vector = U8Vec::with_capacity(4, 0).unwrap();
    let _ = vector.get(0);
}

#[test]
#[should_panic(expected = "element slice does not match element size")]
fn test_wrong_element_length_panics() {
    let mut vector = U8Vec::with_capacity(4, 4).unwrap();
    let _ = vector.push_back(&[1, 2]);
}

#[test]
#[should_panic(expected = "cursor index beyond end")]
fn test_cursor_past_end_panics() {
    let vector = U8Vec::with_capacity(4, 1).unwrap();
    let _ = vector.cursor_at(1);
}

#[test]
#[should_panic(expected = "comparing cursors of different element sizes")]
fn test_mismatched_cursor_widths_panic() {
    let narrow = U8Vec::with_capacity(4, 1).unwrap();
    let wide = U8Vec::with_capacity(4, 8).unwrap();

    let _ = narrow.begin().unwrap().equals(&wide.begin().unwrap());
}

#[test]
fn test_valid_use_does_not_panic() {
    let mut vector = U8Vec::with_capacity(0, 1).unwrap();
    for byte in b"abcdef" {
        vector.push_back(&[*byte]).unwrap();
    }
    vector.insert(6, b"g").unwrap();
    vector.assign(0, b"z").unwrap();
    vector.remove(3).unwrap();
    vector.pop_back().unwrap();

    let begin = vector.begin().unwrap();
    let end = vector.end().unwrap();
    assert!(begin.is_before(&end));
    assert_eq!(vector.as_bytes(), b"zbcef");
}
