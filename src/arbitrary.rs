//! `proptest` strategies for [`Optional`] (requires the `proptest` feature).
//!
//! ```
//! use optcell::{arbitrary, Optional};
//! use proptest::prelude::*;
//!
//! proptest!(|(opt in arbitrary::optional::<_, optcell::Managed<u8>>(any::<u8>()))| {
//!     let _: Optional<u8> = opt;
//! });
//! ```

use core::fmt;

use proptest::{option, strategy::Strategy};

use crate::{lifecycle::Lifecycle, Optional};

/// Generates optionals that are empty about a quarter of the time and
/// otherwise hold a value from `inner`.
pub fn optional<T, L>(inner: impl Strategy<Value = T>) -> impl Strategy<Value = Optional<T, L>>
where
    T: fmt::Debug,
    L: Lifecycle<T>,
{
    option::weighted(0.75, inner).prop_map(Optional::from)
}
