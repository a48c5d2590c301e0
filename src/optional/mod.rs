//! `Optional` — an allocation-free container holding zero or one `T`.
//!
//! `Optional<T>` stores its payload inline in a [`Slot`](crate::storage::Slot)
//! next to a presence flag. The second type parameter picks the lifecycle
//! strategy at compile time:
//!
//! - `Optional<T>` (= `Optional<T, Managed<T>>`) works for any `T`.
//! - [`TrivialOptional<T>`] (= `Optional<T, Trivial<T>>`) requires `T: Copy`
//!   and is itself `Copy`, costing exactly a value plus a flag.
//!
//! ## Access
//!
//! | method | empty optional |
//! |---|---|
//! | [`get`](Optional::get) / [`get_mut`](Optional::get_mut) | `None` |
//! | [`try_value`](Optional::try_value) | `Err(EmptyError)` |
//! | [`value`](Optional::value), `*opt` | panics |
//! | [`get_unchecked`](Optional::get_unchecked) | undefined behaviour (`unsafe`) |

mod cmp;
mod convert;

pub use convert::{Nullopt, NULLOPT};

use core::{
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use crate::error::EmptyError;
use crate::lifecycle::{Lifecycle, Managed, Trivial};

const EMPTY_ACCESS: &str = "accessed the value of an empty `Optional`";

/// A container holding either one `T` or nothing, stored inline.
///
/// # Examples
///
/// ```
/// use optcell::Optional;
///
/// let mut name: Optional<String> = Optional::new();
/// assert!(!name.has_value());
///
/// name.emplace_with(|| "ferris".to_owned());
/// assert_eq!(name.value(), "ferris");
///
/// name.reset();
/// assert!(name.is_none());
/// ```
pub struct Optional<T, L: Lifecycle<T> = Managed<T>> {
    lifecycle: L,
    _marker: PhantomData<T>,
}

/// An `Optional` over a `Copy` payload; it is `Copy` itself.
pub type TrivialOptional<T> = Optional<T, Trivial<T>>;

impl<T, L: Lifecycle<T>> Optional<T, L> {
    /// Creates an empty optional.
    #[inline]
    pub const fn new() -> Self {
        Self::from_lifecycle(L::VACANT)
    }

    /// Creates an empty optional. Same as [`new`](Self::new).
    #[inline]
    pub const fn none() -> Self {
        Self::new()
    }

    /// Creates an optional holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        Self::from_lifecycle(L::occupied(value))
    }

    /// Creates an optional holding the value produced by `init`.
    ///
    /// Arguments for the payload's constructor are captured by the closure;
    /// the value is written straight into the optional's storage.
    #[inline]
    pub fn in_place<F>(init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut this = Self::new();
        this.lifecycle.emplace_with(init);
        this
    }

    /// Fallible [`in_place`](Self::in_place): the constructor's error is
    /// returned unchanged.
    #[inline]
    pub fn try_in_place<E, F>(init: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut this = Self::new();
        this.lifecycle.try_emplace_with(init)?;
        Ok(this)
    }

    #[inline(always)]
    const fn from_lifecycle(lifecycle: L) -> Self {
        Self {
            lifecycle,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if a value is held.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.lifecycle.is_present()
    }

    /// Returns `true` if a value is held. Same as [`has_value`](Self::has_value).
    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.has_value()
    }

    /// Returns `true` if no value is held.
    #[inline(always)]
    pub fn is_none(&self) -> bool {
        !self.has_value()
    }

    /// Returns a shared reference to the held value, if any.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.lifecycle.get()
    }

    /// Returns an exclusive reference to the held value, if any.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.lifecycle.get_mut()
    }

    /// Borrows the optional as a standard `Option<&T>`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.get()
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("{EMPTY_ACCESS}"),
        }
    }

    /// Returns the held value mutably.
    ///
    /// # Panics
    /// Panics if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("{EMPTY_ACCESS}"),
        }
    }

    /// Returns the held value, or [`EmptyError`] if there is none.
    ///
    /// # Errors
    /// Returns `EmptyError` if the optional is empty.
    #[inline]
    pub fn try_value(&self) -> Result<&T, EmptyError> {
        self.get().ok_or(EmptyError)
    }

    /// Returns the held value mutably, or [`EmptyError`] if there is none.
    ///
    /// # Errors
    /// Returns `EmptyError` if the optional is empty.
    #[inline]
    pub fn try_value_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.get_mut().ok_or(EmptyError)
    }

    /// Returns the held value without checking presence.
    ///
    /// # Safety
    /// The optional must hold a value.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.has_value(), "{EMPTY_ACCESS}");
        // SAFETY: caller guarantees presence.
        unsafe { self.lifecycle.slot().assume_init_ref() }
    }

    /// Returns the held value mutably without checking presence.
    ///
    /// # Safety
    /// The optional must hold a value.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value(), "{EMPTY_ACCESS}");
        // SAFETY: caller guarantees presence; the flag is not touched.
        unsafe {
            let (slot, _) = self.lifecycle.parts_mut();
            slot.assume_init_mut()
        }
    }

    /// Replaces the content with `value` and returns a reference to it.
    ///
    /// Any held value is dropped first.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.lifecycle.emplace_with(|| value)
    }

    /// Replaces the content with the value produced by `init`.
    ///
    /// Any held value is dropped *before* `init` runs; if `init` panics the
    /// optional is left empty.
    #[inline]
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.lifecycle.emplace_with(init)
    }

    /// Fallible [`emplace_with`](Self::emplace_with).
    ///
    /// # Errors
    /// Returns whatever `init` returns; the optional is then empty.
    #[inline]
    pub fn try_emplace_with<E, F>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.lifecycle.try_emplace_with(init)
    }

    /// Drops the held value, if any, leaving the optional empty.
    #[inline]
    pub fn reset(&mut self) {
        self.lifecycle.reset();
    }

    /// Moves the held value out, leaving the optional empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.lifecycle.take()
    }

    /// Stores `value` and returns the previously held one, if any.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take();
        self.emplace(value);
        old
    }

    /// Move-assigns `other` into `self`.
    ///
    /// A live value in `self` is assigned over in place when `other` holds a
    /// value, and dropped when `other` is empty.
    #[inline]
    pub fn assign(&mut self, other: Self) {
        self.lifecycle.assign(other.lifecycle);
    }

    /// Converts into a standard `Option<T>`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }
}

impl<T, L: Lifecycle<T>> Default for Optional<T, L> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L: Lifecycle<T> + Clone> Clone for Optional<T, L> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_lifecycle(self.lifecycle.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.lifecycle.clone_from(&source.lifecycle);
    }
}

impl<T: Copy> Copy for Optional<T, Trivial<T>> {}

impl<T, L: Lifecycle<T>> Deref for Optional<T, L> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T, L: Lifecycle<T>> DerefMut for Optional<T, L> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T: fmt::Debug, L: Lifecycle<T>> fmt::Debug for Optional<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(<empty>)"),
        }
    }
}

#[cfg(test)]
mod tests;
