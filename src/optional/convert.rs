//! Explicit conversions between `Optional`, `Option` and the empty marker.

use super::Optional;
use crate::lifecycle::Lifecycle;

/// Marker for "no value", convertible into an empty [`Optional`] of any type.
///
/// ```
/// use optcell::{Optional, NULLOPT};
///
/// let empty: Optional<Vec<u8>> = NULLOPT.into();
/// assert!(empty.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nullopt;

/// The [`Nullopt`] marker value.
pub const NULLOPT: Nullopt = Nullopt;

impl<T, L: Lifecycle<T>> From<Nullopt> for Optional<T, L> {
    #[inline]
    fn from(_: Nullopt) -> Self {
        Self::new()
    }
}

impl<T, L: Lifecycle<T>> From<Option<T>> for Optional<T, L> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}
