use core::fmt;

use super::{sealed, Lifecycle};
use crate::storage::Slot;
use crate::trace::trace_lifecycle;

/// Lifecycle for `Copy` payloads.
///
/// A plain (slot, flag) pair with no `Drop`: copy and move are bitwise, and
/// copying an uninitialized slot next to a `false` flag is harmless because
/// `T` has no drop glue. `Optional<T, Trivial<T>>` is therefore `Copy` and
/// costs no more than `(T, bool)`.
#[derive(Clone, Copy)]
pub struct Trivial<T: Copy> {
    slot: Slot<T>,
    present: bool,
}

impl<T: Copy> sealed::Sealed for Trivial<T> {}

impl<T: Copy> Lifecycle<T> for Trivial<T> {
    const VACANT: Self = Self {
        slot: Slot::uninit(),
        present: false,
    };

    #[inline(always)]
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

    #[inline(always)]
    unsafe fn destroy(&mut self) {
        // `T: Copy` has no destructor.
        self.present = false;
    }
}

impl<T: Copy> Default for Trivial<T> {
    fn default() -> Self {
        Self::VACANT
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Trivial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trivial").field("value", &self.get()).finish()
    }
}
