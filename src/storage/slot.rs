//! `Slot` — raw, correctly aligned capacity for exactly one `T`.

use core::mem::MaybeUninit;

use super::access;

/// Uninitialized-by-default storage for a single `T`.
///
/// A `Slot` never constructs or drops a `T` on its own. Whether a value is
/// live is tracked one layer up (see [`crate::lifecycle`]); dropping a slot
/// is always a no-op, which is the only sound teardown for memory whose
/// initialization state is unknown.
///
/// For `T: Copy` the slot is itself `Copy`: copying possibly-uninitialized
/// bytes of a type without drop glue is harmless.
#[repr(transparent)]
pub struct Slot<T>(MaybeUninit<T>);

impl<T> Slot<T> {
    /// Creates an empty slot without constructing a `T`.
    #[inline(always)]
    pub const fn uninit() -> Self {
        Self(MaybeUninit::uninit())
    }

    /// Creates a slot already holding `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(MaybeUninit::new(value))
    }

    /// Returns a raw pointer to the (possibly uninitialized) value.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    /// Returns a raw mutable pointer to the (possibly uninitialized) value.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    /// Writes `value` into the slot and returns a reference to it.
    ///
    /// Any value previously in the slot is overwritten without being dropped.
    #[inline(always)]
    pub fn write(&mut self, value: T) -> &mut T {
        access::write(&mut self.0, value)
    }

    /// # Safety
    /// The slot must hold an initialized `T`.
    #[inline(always)]
    pub unsafe fn assume_init_ref(&self) -> &T {
        // SAFETY: forwarded to the caller.
        unsafe { access::assume_init_ref(&self.0) }
    }

    /// # Safety
    /// The slot must hold an initialized `T`.
    #[inline(always)]
    pub unsafe fn assume_init_mut(&mut self) -> &mut T {
        // SAFETY: forwarded to the caller.
        unsafe { access::assume_init_mut(&mut self.0) }
    }

    /// Moves the value out, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// The slot must hold an initialized `T`, and the caller must not read or
    /// drop it again until it is rewritten.
    #[inline(always)]
    pub unsafe fn read(&self) -> T {
        // SAFETY: forwarded to the caller.
        unsafe { access::read(&self.0) }
    }

    /// Drops the value in place, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// The slot must hold an initialized `T` that has not been dropped yet.
    #[inline(always)]
    pub unsafe fn drop_in_place(&mut self) {
        // SAFETY: forwarded to the caller.
        unsafe { access::drop_in_place(&mut self.0) }
    }
}

impl<T: Copy> Clone for Slot<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for Slot<T> {}
