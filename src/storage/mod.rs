//! Storage layer: raw capacity for one value, with no notion of presence.
//!
//! This layer intentionally exposes *minimal* surface area and concentrates
//! the unsafe `MaybeUninit` operations in [`access`]. Higher layers
//! (`lifecycle`, `optional`) never touch `ptr::*` directly.

pub(crate) mod access;
mod slot;

pub use slot::Slot;
