//! Lifecycle tracing hooks.
//!
//! With the `tracing` feature enabled, every state transition of an optional
//! (construct, destroy, take, assign) emits a `TRACE` event on the
//! `optcell::lifecycle` target. Without it the macro expands to nothing.

/// Emits a lifecycle transition event for payload type `$ty`.
///
/// ```ignore
/// trace_lifecycle!("emplace", T);
/// ```
macro_rules! trace_lifecycle {
    ($op:expr, $ty:ty) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            target: "optcell::lifecycle",
            op = $op,
            ty = ::core::any::type_name::<$ty>()
        );
    };
}

pub(crate) use trace_lifecycle;
