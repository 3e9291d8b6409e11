// Equality, hashing and variance of Either

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use either_core::{left, right, Either};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_same_variant_equal_payload() {
    assert_eq!(left::<&str, i32>("a"), left("a"));
    assert_eq!(right::<&str, i32>(1), right(1));
    assert_ne!(left::<&str, i32>("a"), left("b"));
}

#[test]
fn test_variants_never_equal() {
    let l: Either<i32, i32> = left(5);
    let r: Either<i32, i32> = right(5);
    assert_ne!(l, r);
    assert_ne!(hash_of(&l), hash_of(&r));
}

#[test]
fn test_absent_payloads() {
    let none_a: Either<Option<&str>, i32> = left(None);
    let none_b: Either<Option<&str>, i32> = left(None);
    let some: Either<Option<&str>, i32> = left(Some("x"));
    assert_eq!(none_a, none_b);
    assert_eq!(hash_of(&none_a), hash_of(&none_b));
    assert_ne!(none_a, some);

    let right_none: Either<Option<i32>, Option<i32>> = right(None);
    let left_none: Either<Option<i32>, Option<i32>> = left(None);
    assert_ne!(left_none, right_none);
}

#[test]
fn test_shared_payload_compares_by_value() {
    let a = Rc::new("shared".to_string());
    let e1: Either<Rc<String>, ()> = left(Rc::clone(&a));
    let e2: Either<Rc<String>, ()> = left(Rc::new("shared".to_string()));
    assert_eq!(e1, e2);
    assert_eq!(Rc::strong_count(&a), 2);
}

#[test]
fn test_hash_map_keys() {
    let mut m: HashMap<Either<String, i32>, &str> = HashMap::new();
    let left_key: Either<String, i32> = left("foo".to_string());
    let right_key: Either<String, i32> = right(42);

    assert_eq!(m.insert(left_key.clone(), "bar"), None);
    assert_eq!(m.insert(right_key.clone(), "hello"), None);
    assert_eq!(m.len(), 2);

    assert_eq!(m.get(&left("foo".to_string())), Some(&"bar"));
    assert_eq!(m.remove(&left("foo".to_string())), Some("bar"));
    assert!(!m.contains_key(&left_key));

    assert_eq!(m.insert(right(42), "world"), Some("hello"));
    assert_eq!(m.get(&right_key), Some(&"world"));
    assert_eq!(m.len(), 1);
}

#[test]
fn test_hash_set_distinguishes_variants() {
    let set: HashSet<Either<u8, u8>> = [left(1), right(1), left(1)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_ordering_puts_left_first() {
    let mut items: Vec<Either<i32, i32>> = vec![right(0), left(9), right(-1), left(3)];
    items.sort();
    assert_eq!(items, vec![left(3), left(9), right(-1), right(0)]);
}

#[test]
fn test_debug_and_display() {
    let e: Either<&str, i32> = left("Hello");
    assert_eq!(format!("{:?}", e), "Left(\"Hello\")");
    assert_eq!(e.to_string(), "Left(Hello)");
    assert_eq!(right::<&str, i32>(0).to_string(), "Right(0)");
}

// Either is covariant in both parameters.
fn widen<'a>(e: Either<&'static str, &'static [u8]>) -> Either<&'a str, &'a [u8]> {
    e
}

#[test]
fn test_covariance() {
    let local = String::from("local");
    let mut values: Vec<Either<&str, &[u8]>> = vec![left(local.as_str())];
    values.push(widen(right(&b"bytes"[..])));
    assert_eq!(values.len(), 2);
}
