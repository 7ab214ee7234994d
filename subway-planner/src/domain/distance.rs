//! Track distance type.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing an invalid distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance: {reason}")]
pub struct InvalidDistance {
    reason: &'static str,
}

/// A strictly positive track distance.
///
/// Every section has a distance greater than zero. This type guarantees it
/// by construction, and the arithmetic it offers refuses to produce zero.
///
/// # Examples
///
/// ```
/// use subway_planner::domain::Distance;
///
/// let ten = Distance::new(10).unwrap();
/// assert_eq!(ten.get(), 10);
///
/// // Zero is rejected
/// assert!(Distance::new(0).is_err());
///
/// // Shortening can never reach zero
/// let four = Distance::new(4).unwrap();
/// assert_eq!(ten.checked_sub(four).map(|d| d.get()), Some(6));
/// assert!(four.checked_sub(four).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Distance(u32);

impl Distance {
    /// Create a distance, rejecting zero.
    pub fn new(value: u32) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance {
                reason: "must be greater than zero",
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw distance.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Subtract `other`, returning `None` unless the result stays positive.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.0
            .checked_sub(other.0)
            .filter(|&d| d > 0)
            .map(Distance)
    }

    /// Add `other`, returning `None` on overflow.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.0).map(Distance)
    }
}

impl TryFrom<u32> for Distance {
    type Error = InvalidDistance;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Distance::new(value)
    }
}

impl From<Distance> for u64 {
    fn from(d: Distance) -> Self {
        u64::from(d.0)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
