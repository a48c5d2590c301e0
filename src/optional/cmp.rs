//! Relational operators.
//!
//! Empty is the unique minimum: it equals only another empty optional and
//! sorts before every held value. Held values compare by `T`.

use core::cmp::Ordering;

use super::Optional;
use crate::lifecycle::Lifecycle;

impl<T: PartialEq, L: Lifecycle<T>> PartialEq for Optional<T, L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq, L: Lifecycle<T>> Eq for Optional<T, L> {}

impl<T: PartialOrd, L: Lifecycle<T>> PartialOrd for Optional<T, L> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<T: Ord, L: Lifecycle<T>> Ord for Optional<T, L> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}
