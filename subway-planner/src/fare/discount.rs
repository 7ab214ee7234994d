//! Rider discount fraction.

use std::fmt;

/// Error returned when a discount fraction is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid discount {value}: {reason}")]
pub struct InvalidDiscount {
    value: f64,
    reason: &'static str,
}

/// The fraction of a fare a rider is let off, between 0 and 1 inclusive.
///
/// The rider's discount policy lives outside this crate; it hands over only
/// this number. Values outside `[0, 1]` are rejected here so the fare
/// formula can never go negative or exceed the undiscounted fare.
///
/// # Examples
///
/// ```
/// use subway_planner::fare::Discount;
///
/// let youth = Discount::new(0.2).unwrap();
/// assert_eq!(youth.fraction(), 0.2);
///
/// assert!(Discount::new(1.5).is_err());
/// assert!(Discount::new(-0.1).is_err());
/// assert!(Discount::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Discount(f64);

impl Discount {
    /// Create a discount from a fraction in `[0, 1]`.
    pub fn new(fraction: f64) -> Result<Self, InvalidDiscount> {
        if fraction.is_nan() {
            return Err(InvalidDiscount {
                value: fraction,
                reason: "must be a number",
            });
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(InvalidDiscount {
                value: fraction,
                reason: "must be between 0 and 1",
            });
        }
        Ok(Self(fraction))
    }

    /// Returns the fraction taken off.
    pub fn fraction(&self) -> f64 {
        self.0
    }
}

impl fmt::Debug for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discount({})", self.0)
    }
}
