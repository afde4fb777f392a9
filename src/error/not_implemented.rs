use core::fmt;

/// Returned by an `XformHash` variant's `approx_nori` method when that
/// variant doesn't carry a precomputed orientation-cell count table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotImplementedError {
    reason: &'static str,
}

impl NotImplementedError {
    pub(crate) const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl fmt::Display for NotImplementedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not implemented: {}", self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotImplementedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
