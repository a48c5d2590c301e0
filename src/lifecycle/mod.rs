//! Lifecycle layer: a [`Slot`] paired with a presence flag.
//!
//! A lifecycle owns at most one `T` and knows whether it is live. It
//! implements construct-in-place, destroy-in-place, copy and move for the
//! pair. Two strategies exist, chosen at compile time by type:
//!
//! - [`Trivial`] for `T: Copy`: the pair is itself `Copy`; copying and moving
//!   are bitwise, destroying is clearing the flag, and there is no `Drop`.
//! - [`Managed`] for everything else: `Drop` resets the slot, and
//!   `clone_from` / [`Lifecycle::assign`] reuse a live destination value
//!   instead of tearing it down.
//!
//! ## Core invariant
//! `is_present()` is true *exactly when* the slot holds a fully constructed
//! `T`. The flag is cleared before a value is dropped or moved out, and set
//! only after a value has been written, so an unwinding constructor or
//! destructor always leaves the pair empty rather than "present over garbage".

mod managed;
mod trivial;

pub use managed::Managed;
pub use trivial::Trivial;

use crate::storage::Slot;
use crate::trace::trace_lifecycle;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Construction, destruction, copy and move for one optional payload.
///
/// This trait is sealed; [`Trivial`] and [`Managed`] are the only
/// implementations. Everything except the primitive accessors and
/// [`destroy`](Lifecycle::destroy) is provided and shared by both.
pub trait Lifecycle<T>: Sized + sealed::Sealed {
    /// The empty state.
    const VACANT: Self;

    /// Creates a lifecycle already holding `value`.
    fn occupied(value: T) -> Self;

    /// Returns `true` if a live value occupies the slot.
    fn is_present(&self) -> bool;

    /// Returns the underlying slot.
    fn slot(&self) -> &Slot<T>;

    /// Returns the slot and the presence flag for in-place mutation.
    ///
    /// # Safety
    /// The caller must leave the flag `true` exactly when the slot holds a
    /// live `T` before handing control back to safe code.
    #[doc(hidden)]
    unsafe fn parts_mut(&mut self) -> (&mut Slot<T>, &mut bool);

    /// Drops the held value and clears the flag.
    ///
    /// # Safety
    /// A value must be present.
    unsafe fn destroy(&mut self);

    /// Returns a shared reference to the held value, if any.
    #[inline]
    fn get(&self) -> Option<&T> {
        if self.is_present() {
            // SAFETY: flag set => slot initialized.
            Some(unsafe { self.slot().assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the held value, if any.
    #[inline]
    fn get_mut(&mut self) -> Option<&mut T> {
        if !self.is_present() {
            return None;
        }
        // SAFETY: flag untouched; slot initialized.
        let (slot, _) = unsafe { self.parts_mut() };
        Some(unsafe { slot.assume_init_mut() })
    }

    /// Drops the held value, if any. Idempotent.
    #[inline]
    fn reset(&mut self) {
        if self.is_present() {
            trace_lifecycle!("reset", T);
            // SAFETY: checked present.
            unsafe { self.destroy() };
        }
    }

    /// Drops any held value, then constructs a new one from `init`.
    ///
    /// The old value is always dropped before `init` runs. If `init` panics
    /// the lifecycle is left empty.
    #[inline]
    fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = init();
        trace_lifecycle!("emplace", T);
        // SAFETY: slot is vacant; we write before raising the flag.
        let (slot, present) = unsafe { self.parts_mut() };
        let value = slot.write(value);
        *present = true;
        value
    }

    /// Fallible [`emplace_with`](Lifecycle::emplace_with).
    ///
    /// On `Err` the lifecycle is empty and the error is returned unchanged.
    #[inline]
    fn try_emplace_with<E, F>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        let value = init()?;
        trace_lifecycle!("emplace", T);
        // SAFETY: as in `emplace_with`.
        let (slot, present) = unsafe { self.parts_mut() };
        let value = slot.write(value);
        *present = true;
        Ok(value)
    }

    /// Moves the held value out, leaving the lifecycle empty.
    #[inline]
    fn take(&mut self) -> Option<T> {
        if !self.is_present() {
            return None;
        }
        trace_lifecycle!("take", T);
        // SAFETY: present; the flag is lowered before the bytes are read out.
        let (slot, present) = unsafe { self.parts_mut() };
        *present = false;
        Some(unsafe { slot.read() })
    }

    /// Move-assigns `source` into `self`.
    ///
    /// | source  | self    | effect                                  |
    /// |---------|---------|-----------------------------------------|
    /// | empty   | empty   | nothing                                 |
    /// | empty   | present | drop own value                          |
    /// | present | empty   | move source value in                    |
    /// | present | present | `*own = source_value` (assign in place) |
    #[inline]
    fn assign(&mut self, mut source: Self) {
        match source.take() {
            None => self.reset(),
            Some(value) => {
                trace_lifecycle!("assign", T);
                if let Some(own) = self.get_mut() {
                    *own = value;
                } else {
                    self.emplace_with(|| value);
                }
            }
        }
    }
}
