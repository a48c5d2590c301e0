//! Error types.

/// Returned by checked accessors when the optional holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl core::fmt::Display for EmptyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("optional holds no value")
    }
}

impl std::error::Error for EmptyError {}
