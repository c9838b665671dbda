//! Strongly typed, zero-cost identifier wrappers.
//!
//! A `PassengerId` is an index into the run's append-only passenger store.
//! Identity is the slot, never the field values: two passengers generated
//! with identical origin/destination/time are still distinct because they
//! occupy distinct slots.  This is what lets the wait-time map key on the
//! passenger rather than on its (possibly colliding) contents.

use std::fmt;

/// Index of a passenger in the run's passenger store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerId(pub u32);

impl PassengerId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: PassengerId = PassengerId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for PassengerId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PassengerId({})", self.0)
    }
}

impl From<PassengerId> for usize {
    #[inline(always)]
    fn from(id: PassengerId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PassengerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PassengerId, Self::Error> {
        u32::try_from(n).map(PassengerId)
    }
}
