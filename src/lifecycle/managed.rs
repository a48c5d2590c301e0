use core::{fmt, mem};

use super::{sealed, Lifecycle};
use crate::storage::Slot;
use crate::trace::trace_lifecycle;

/// Lifecycle for arbitrary payloads.
///
/// Drops its value on `Drop`, and copies with the four-case discipline: a
/// live destination is cloned *into* (`T::clone_from`) rather than dropped
/// and rebuilt, so payloads that reuse internal buffers keep them.
pub struct Managed<T> {
    slot: Slot<T>,
    present: bool,
}

impl<T> sealed::Sealed for Managed<T> {}

impl<T> Lifecycle<T> for Managed<T> {
    const VACANT: Self = Self {
        slot: Slot::uninit(),
        present: false,
    };

    #[inline]
    fn occupied(value: T) -> Self {
        trace_lifecycle!("construct", T);
        Self {
            slot: Slot::new(value),
            present: true,
        }
    }

    #[inline(always)]
    fn is_present(&self) -> bool {
        self.present
    }

    #[inline(always)]
    fn slot(&self) -> &Slot<T> {
        &self.slot
    }

    #[inline(always)]
    unsafe fn parts_mut(&mut self) -> (&mut Slot<T>, &mut bool) {
        (&mut self.slot, &mut self.present)
    }

    #[inline]
    unsafe fn destroy(&mut self) {
        debug_assert!(self.present, "destroy on a vacant lifecycle");
        // Lower the flag first: a panicking destructor must not be re-run.
        self.present = false;
        // SAFETY: caller guarantees the slot was initialized.
        unsafe { self.slot.drop_in_place() };
    }
}

impl<T> Drop for Managed<T> {
    #[inline]
    fn drop(&mut self) {
        if mem::needs_drop::<T>() {
            self.reset();
        }
    }
}

impl<T: Clone> Clone for Managed<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::occupied(value.clone()),
            None => Self::VACANT,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (self.present, source.get()) {
            (false, None) => {}
            (true, None) => self.reset(),
            (false, Some(value)) => {
                self.emplace_with(|| value.clone());
            }
            (true, Some(value)) => {
                trace_lifecycle!("clone_from", T);
                // SAFETY: `self.present` checked above.
                unsafe { self.slot.assume_init_mut() }.clone_from(value);
            }
        }
    }
}

impl<T> Default for Managed<T> {
    fn default() -> Self {
        Self::VACANT
    }
}

impl<T: fmt::Debug> fmt::Debug for Managed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Managed").field("value", &self.get()).finish()
    }
}
