use super::{Optional, TrivialOptional, NULLOPT};
use crate::EmptyError;
use core::cmp::Ordering;

#[test]
fn default_and_nullopt_are_empty() {
    let a: Optional<String> = Optional::default();
    let b: Optional<String> = NULLOPT.into();
    let c: TrivialOptional<u32> = Optional::none();
    assert!(a.is_none());
    assert!(b.is_none());
    assert!(!c.has_value());
}

#[test]
fn some_holds_value() {
    let opt: Optional<String> = Optional::some("hi".to_owned());
    assert!(opt.has_value());
    assert_eq!(opt.value(), "hi");
    assert_eq!(opt.len(), 2, "deref reaches the payload");
}

#[test]
fn in_place_constructs_from_captured_args() {
    let (n, fill) = (3, 'z');
    let opt: Optional<String> = Optional::in_place(|| std::iter::repeat(fill).take(n).collect());
    assert_eq!(opt.get().map(String::as_str), Some("zzz"));
}

#[test]
fn try_in_place_propagates_error() {
    let bad: Result<Optional<u8>, _> = Optional::try_in_place(|| "300".parse::<u8>());
    assert!(bad.is_err());

    let good: Optional<u8> = Optional::try_in_place(|| "30".parse::<u8>()).unwrap();
    assert_eq!(good.get(), Some(&30));
}

#[test]
fn trivial_scenario_emplace_then_reset() {
    let mut opt: TrivialOptional<i32> = Optional::new();
    assert!(opt.is_none());
    opt.emplace(42);
    assert_eq!(*opt, 42);
    opt.reset();
    assert!(opt.is_none());
}

#[test]
fn trivial_optional_is_copy() {
    let a: TrivialOptional<i32> = Optional::some(1);
    let mut b = a;
    *b = 2;
    assert_eq!(a.get(), Some(&1));
    assert_eq!(b.get(), Some(&2));
}

#[test]
fn checked_access_reports_empty() {
    let mut opt: Optional<Vec<u8>> = Optional::new();
    assert_eq!(opt.try_value(), Err(EmptyError));
    assert_eq!(opt.try_value_mut(), Err(EmptyError));

    opt.emplace(vec![1]);
    opt.try_value_mut().unwrap().push(2);
    assert_eq!(opt.try_value().map(Vec::len), Ok(2));
}

#[test]
#[should_panic(expected = "accessed the value of an empty `Optional`")]
fn value_on_empty_panics() {
    let opt: Optional<u8> = Optional::new();
    let _ = opt.value();
}

#[test]
#[should_panic(expected = "accessed the value of an empty `Optional`")]
fn deref_on_empty_panics() {
    let opt: TrivialOptional<u8> = Optional::new();
    let _value: u8 = *opt;
}

#[test]
fn unchecked_access_on_present_value() {
    let mut opt: Optional<u16> = Optional::some(7);
    // SAFETY: `opt` holds a value.
    unsafe {
        *opt.get_unchecked_mut() += 1;
        assert_eq!(*opt.get_unchecked(), 8);
    }
}

#[test]
fn replace_returns_previous() {
    let mut opt: Optional<&str> = Optional::new();
    assert_eq!(opt.replace("a"), None);
    assert_eq!(opt.replace("b"), Some("a"));
    assert_eq!(opt.into_option(), Some("b"));
}

#[test]
fn take_leaves_source_empty() {
    let mut src: Optional<String> = Optional::some("moved".to_owned());
    let mut dst: Optional<String> = Optional::new();
    dst.assign(Optional::from(src.take()));
    assert!(src.is_none());
    assert_eq!(dst.value(), "moved");
}

#[test]
fn clone_from_between_optionals() {
    let src: Optional<String> = Optional::some("payload".to_owned());
    let mut dst: Optional<String> = Optional::some("previous".to_owned());
    dst.clone_from(&src);
    assert_eq!(dst, src);

    dst.clone_from(&Optional::new());
    assert!(dst.is_none());
}

#[test]
fn equality_rules() {
    let empty: Optional<i32> = Optional::new();
    let five: Optional<i32> = Optional::some(5);
    assert_eq!(empty, Optional::new());
    assert_ne!(empty, five);
    assert_ne!(five, empty);
    assert_eq!(five, Optional::some(5));
}

#[test]
fn ordering_scenario() {
    let a: Optional<i32> = Optional::some(5);
    let b: Optional<i32> = Optional::some(7);
    assert!(a < b);
    assert!(a != b);
    assert!(Optional::new() < a);
    assert!(b > Optional::new());
    assert!(a <= a.clone());

    let empty: Optional<i32> = Optional::new();
    assert_eq!(empty.cmp(&Optional::new()), Ordering::Equal);
    assert_eq!(empty.cmp(&a), Ordering::Less);
}

#[test]
fn partial_order_follows_payload() {
    let nan: Optional<f64> = Optional::some(f64::NAN);
    let one: Optional<f64> = Optional::some(1.0);
    assert_eq!(nan.partial_cmp(&one), None);
    let empty: Optional<f64> = Optional::new();
    assert_eq!(empty.partial_cmp(&nan), Some(Ordering::Less));
}

#[test]
fn debug_formatting() {
    let some: Optional<i32> = Optional::some(3);
    let none: Optional<i32> = Optional::new();
    assert_eq!(format!("{some:?}"), "Optional(3)");
    assert_eq!(format!("{none:?}"), "Optional(<empty>)");
}
