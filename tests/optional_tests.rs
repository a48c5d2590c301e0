//! Integration tests for `Optional` lifecycle behaviour.

use optcell::*;
use std::{
    cell::Cell,
    panic::{catch_unwind, AssertUnwindSafe},
    rc::Rc,
};

/// Counts constructions and drops so tests can check for leaks and double drops.
#[derive(Default)]
struct Ledger {
    built: Cell<usize>,
    dropped: Cell<usize>,
}

impl Ledger {
    fn live(&self) -> usize {
        self.built.get() - self.dropped.get()
    }
}

struct Token {
    id: usize,
    ledger: Rc<Ledger>,
}

impl Token {
    fn new(id: usize, ledger: &Rc<Ledger>) -> Self {
        ledger.built.set(ledger.built.get() + 1);
        Self {
            id,
            ledger: ledger.clone(),
        }
    }
}

impl Clone for Token {
    fn clone(&self) -> Self {
        Self::new(self.id, &self.ledger)
    }
}

impl Drop for Token {
    fn drop(&mut self) {
        self.ledger.dropped.set(self.ledger.dropped.get() + 1);
    }
}

#[test]
fn test_drop_present_optional_drops_once() {
    let ledger = Rc::new(Ledger::default());
    {
        let opt: Optional<Token> = Optional::some(Token::new(1, &ledger));
        assert!(opt.has_value());
        assert_eq!(ledger.live(), 1);
    }
    assert_eq!(ledger.built.get(), 1);
    assert_eq!(ledger.dropped.get(), 1);
}

#[test]
fn test_drop_empty_optional_drops_nothing() {
    let ledger = Rc::new(Ledger::default());
    {
        let _opt: Optional<Token> = Optional::new();
    }
    assert_eq!(ledger.dropped.get(), 0);
}

#[test]
fn test_emplace_from_any_state() {
    let ledger = Rc::new(Ledger::default());
    let mut opt: Optional<Token> = Optional::new();

    opt.emplace(Token::new(1, &ledger));
    assert_eq!(opt.id, 1);
    opt.emplace_with(|| Token::new(2, &ledger));
    assert_eq!(opt.id, 2);
    assert_eq!(ledger.live(), 1);

    opt.reset();
    opt.reset();
    assert!(opt.is_none());
    assert_eq!(ledger.live(), 0);
}

#[test]
fn test_emplace_panic_leaves_empty_without_leak() {
    let ledger = Rc::new(Ledger::default());
    let mut opt: Optional<Token> = Optional::some(Token::new(1, &ledger));

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        opt.emplace_with(|| panic!("payload constructor failed"));
    }));

    assert!(outcome.is_err());
    assert!(opt.is_none());
    assert_eq!(ledger.live(), 0);
    drop(opt);
    assert_eq!(ledger.dropped.get(), 1);
}

#[test]
fn test_panicking_destructor_is_not_rerun() {
    struct Bomb(Rc<Cell<usize>>);

    impl Drop for Bomb {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
            panic!("destructor failed");
        }
    }

    let count = Rc::new(Cell::new(0));
    let mut opt: Optional<Bomb> = Optional::some(Bomb(count.clone()));

    let outcome = catch_unwind(AssertUnwindSafe(|| opt.reset()));
    assert!(outcome.is_err());
    assert!(opt.is_none());

    drop(opt);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_clone_of_present_and_empty() {
    let ledger = Rc::new(Ledger::default());
    let src: Optional<Token> = Optional::some(Token::new(7, &ledger));
    let copy = src.clone();
    assert_eq!(copy.id, 7);
    assert_eq!(src.id, 7);
    assert_eq!(ledger.live(), 2);

    let empty: Optional<Token> = Optional::new();
    assert!(empty.clone().is_none());
}

#[test]
fn test_empty_string_clone_does_not_alias() {
    let mut original: Optional<String> = Optional::some(String::new());
    let copy = original.clone();

    original.push_str("mutated");

    assert_eq!(copy.value(), "");
    assert_eq!(original.value(), "mutated");
}

#[test]
fn test_assign_transfers_and_drops_correctly() {
    let ledger = Rc::new(Ledger::default());
    let mut dst: Optional<Token> = Optional::some(Token::new(1, &ledger));

    dst.assign(Optional::some(Token::new(2, &ledger)));
    assert_eq!(dst.id, 2);
    assert_eq!(ledger.live(), 1);

    dst.assign(Optional::new());
    assert!(dst.is_none());
    assert_eq!(ledger.live(), 0);

    let mut src: Optional<Token> = Optional::some(Token::new(3, &ledger));
    dst.assign(Optional::from(src.take()));
    assert!(src.is_none());
    assert_eq!(dst.id, 3);
    assert_eq!(ledger.live(), 1);
}

#[test]
fn test_clone_from_keeps_destination_allocation() {
    let mut dst: Optional<Vec<u32>> = Optional::some(Vec::with_capacity(128));
    dst.extend([1, 2, 3]);
    let buffer = dst.as_ptr();

    let src: Optional<Vec<u32>> = Optional::some(vec![9, 9]);
    dst.clone_from(&src);

    assert_eq!(dst.value(), &[9, 9]);
    assert_eq!(dst.as_ptr(), buffer);
}

#[test]
fn test_trivial_optional_copy_semantics() {
    let mut a: TrivialOptional<(u16, u16)> = Optional::some((1, 2));
    let b = a;
    a.reset();
    assert!(a.is_none());
    assert_eq!(b.get(), Some(&(1, 2)));
}

#[test]
fn test_trivial_and_managed_agree() {
    let mut trivial: TrivialOptional<i64> = Optional::new();
    let mut managed: Optional<i64> = Optional::new();

    for step in 0..16_i64 {
        if step % 3 == 0 {
            trivial.reset();
            managed.reset();
        } else {
            trivial.emplace(step);
            managed.emplace(step);
        }
        assert_eq!(trivial.into_option(), managed.clone().into_option());
    }
}

#[test]
fn test_sorting_places_empty_first() {
    let mut values: Vec<Optional<i32>> = vec![
        Optional::some(3),
        Optional::new(),
        Optional::some(-1),
        Optional::new(),
        Optional::some(2),
    ];
    values.sort();

    let sorted: Vec<Option<i32>> = values.into_iter().map(Optional::into_option).collect();
    assert_eq!(sorted, vec![None, None, Some(-1), Some(2), Some(3)]);
}

#[test]
fn test_try_value_error_is_std_error() {
    let opt: Optional<u8> = Optional::new();
    let err: Box<dyn std::error::Error> = Box::new(opt.try_value().unwrap_err());
    assert_eq!(err.to_string(), "optional holds no value");
}
