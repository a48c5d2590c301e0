//! # `optcell` - Inline Optional Values
//!
//! An allocation-free container holding exactly one value or nothing, built
//! from explicit storage and lifecycle layers instead of a compiler-generated
//! enum. Every transition between "empty" and "holding a value" goes through a
//! small, audited surface, and the cost of copy, move and drop is chosen at
//! compile time from the payload type.
//!
//! ## Safety Guarantees
//!
//! - **No double drop**: the presence flag is lowered before a value is
//!   dropped or moved out, so an unwinding destructor is never re-run.
//! - **No leaks**: a held value is dropped exactly once, when the optional is
//!   reset, re-emplaced, assigned over, or itself dropped.
//! - **No reads of empty storage** from safe code: access is checked (panic or
//!   [`EmptyError`]); the unchecked accessors are `unsafe`.
//!
//! ## Architecture
//!
//! Three layers, each built on the one below:
//!
//! 1. **Storage** ([`Slot<T>`]): `MaybeUninit<T>` capacity that never
//!    constructs or drops on its own.
//! 2. **Lifecycle** ([`Lifecycle<T>`]): a slot plus a presence flag, with two
//!    strategies selected by type:
//!    - [`Trivial<T>`] for `T: Copy`: bitwise copy, no `Drop`, `Copy` itself.
//!    - [`Managed<T>`] for everything else: `Drop`, four-case `clone_from`
//!      and move-assign that reuse a live destination value.
//! 3. **Container** ([`Optional<T, L>`]): presence query, access,
//!    emplace/reset, conversions, and a total order with empty as the minimum.
//!
//! ## Example
//!
//! ```rust
//! use optcell::{Optional, TrivialOptional};
//!
//! let mut slot: TrivialOptional<i32> = Optional::new();
//! assert!(slot.is_none());
//!
//! slot.emplace(42);
//! assert_eq!(*slot, 42);
//!
//! let copy = slot; // `Copy` for trivial payloads
//! slot.reset();
//! assert!(slot.is_none());
//! assert_eq!(copy.get(), Some(&42));
//!
//! assert!(Optional::<i32>::none() < Optional::some(i32::MIN));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `TRACE` events on the `optcell::lifecycle` target for
//!   every construct / destroy / take / assign transition.
//! - `proptest`: expose [`arbitrary`] strategies for downstream property tests.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod lifecycle;
pub mod optional;
pub mod storage;

#[cfg(feature = "proptest")]
pub mod arbitrary;

mod trace;

pub use error::EmptyError;
pub use lifecycle::{Lifecycle, Managed, Trivial};
pub use optional::{Nullopt, Optional, TrivialOptional, NULLOPT};
pub use storage::Slot;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The slot adds nothing to the payload.
    assert!(mem::size_of::<Slot<u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<Slot<u64>>() == mem::align_of::<u64>());

    // A trivial optional costs no more than a raw value-plus-flag pair.
    assert!(mem::size_of::<TrivialOptional<u64>>() <= mem::size_of::<(u64, bool)>());
    assert!(mem::size_of::<TrivialOptional<u8>>() == 2);

    // The strategy does not change the footprint.
    assert!(mem::size_of::<Optional<u32>>() == mem::size_of::<TrivialOptional<u32>>());
    assert!(mem::size_of::<Optional<String>>() <= mem::size_of::<(String, bool)>());

    // The empty marker is free.
    assert!(mem::size_of::<Nullopt>() == 0);
};
