//! The facade re-exports the whole public surface of `growarr-core`.

use growarr::{Access, GrowableArray, IndexOutOfRange, MIN_CAPACITY, grow_array};
use pretty_assertions::assert_eq;

#[test]
fn test_reexported_surface() {
    let mut names: GrowableArray<&str> = grow_array!["Bob", "Joe"];
    assert_eq!(names.capacity(), MIN_CAPACITY);

    names.add("Ann");
    assert_eq!(names.to_text(), "[Bob, Joe, Ann]");

    let err: IndexOutOfRange = names.exchange(0, 3).unwrap_err();
    assert_eq!(err.access, Access::Exchange);
    assert_eq!(names.to_text(), "[Bob, Joe, Ann]");
}

#[test]
fn test_error_is_boxable() {
    let names = grow_array!["Bob"];
    let err: Box<dyn std::error::Error> = Box::new(names.get(1).unwrap_err());
    assert_eq!(
        err.to_string(),
        "`get` index 1 is out of range for length 1 (valid range is 0..1)"
    );
}
