//! Allocation failure surfaced by every growth path.

use core::fmt;
use std::collections::TryReserveError;

/// Returned when a container cannot grow its storage.
///
/// Containers are left exactly as they were before the failing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity does not fit in `usize`.
    CapacityOverflow,
    /// The allocator refused the reservation.
    Reserve(TryReserveError),
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::CapacityOverflow => f.write_str("capacity overflow"),
            AllocError::Reserve(e) => write!(f, "allocation failed: {e}"),
        }
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AllocError::CapacityOverflow => None,
            AllocError::Reserve(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for AllocError {
    fn from(e: TryReserveError) -> Self {
        AllocError::Reserve(e)
    }
}
