//! Fare calculator.

use serde::Serialize;
use tracing::debug;

use crate::planner::PathResult;

use super::{Discount, FareConfig};

/// A fare too large to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("fare overflows: {reason}")]
pub struct FareError {
    pub reason: &'static str,
}

/// How a fare was put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareBreakdown {
    pub base_fare: u64,
    /// Highest surcharge among the lines ridden.
    pub line_surcharge: u64,
    pub distance_surcharge: u64,
    /// Whether a rider discount was applied.
    pub discounted: bool,
    pub total: u64,
}

/// Computes fares for found paths.
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    config: FareConfig,
}

impl FareCalculator {
    /// Create a calculator with the given fare constants.
    ///
    /// `config.charge_unit_distance` is treated as at least 1.
    pub fn new(config: FareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// The fare for riding `path`, after `discount` if the rider has one.
    pub fn calculate(
        &self,
        path: &PathResult<'_>,
        discount: Option<Discount>,
    ) -> Result<u64, FareError> {
        Ok(self.breakdown(path, discount)?.total)
    }

    /// The fare for riding `path`, with its components.
    pub fn breakdown(
        &self,
        path: &PathResult<'_>,
        discount: Option<Discount>,
    ) -> Result<FareBreakdown, FareError> {
        self.breakdown_for(path.total_distance, path.max_extra_charge(), discount)
    }

    /// The fare for a route of `distance` whose highest line surcharge is
    /// `extra_charge`.
    pub fn breakdown_for(
        &self,
        distance: u64,
        extra_charge: Option<u64>,
        discount: Option<Discount>,
    ) -> Result<FareBreakdown, FareError> {
        let base_fare = self.config.base_fare;
        let line_surcharge = extra_charge.unwrap_or(0);
        let distance_surcharge = self.distance_surcharge(distance)?;

        let fare = base_fare
            .checked_add(line_surcharge)
            .and_then(|f| f.checked_add(distance_surcharge))
            .ok_or(FareError {
                reason: "surcharges exceed the largest fare",
            })?;
        let total = match discount {
            Some(discount) => self.apply_discount(fare, discount),
            None => fare,
        };

        debug!(
            distance,
            base_fare,
            line_surcharge,
            distance_surcharge,
            discount = discount.map(|d| d.fraction()),
            total,
            "Calculated fare"
        );

        Ok(FareBreakdown {
            base_fare,
            line_surcharge,
            distance_surcharge,
            discounted: discount.is_some(),
            total,
        })
    }

    /// Surcharge for the distance beyond the standard distance.
    ///
    /// `(ceil((d - standard + 1) / unit) + 1) * charge`, so the first charged
    /// band already costs two units.
    pub fn distance_surcharge(&self, distance: u64) -> Result<u64, FareError> {
        let standard = self.config.standard_distance;
        if distance <= standard {
            return Ok(0);
        }

        let over = (distance - standard).saturating_add(1);
        let bands = over.div_ceil(self.config.charge_unit_distance.max(1));
        bands
            .checked_add(1)
            .and_then(|b| b.checked_mul(self.config.charge_per_unit))
            .ok_or(FareError {
                reason: "distance surcharge exceeds the largest fare",
            })
    }

    /// Take the flat deduction off `fare`, then the discount fraction,
    /// rounding up.
    pub fn apply_discount(&self, fare: u64, discount: Discount) -> u64 {
        let deducted = fare.saturating_sub(self.config.discount_deduction);
        (deducted as f64 * (1.0 - discount.fraction())).ceil() as u64
    }
}

/// The fare for riding `path` under the standard fare constants.
pub fn calculate_fare(
    path: &PathResult<'_>,
    discount: Option<Discount>,
) -> Result<u64, FareError> {
    FareCalculator::default().calculate(path, discount)
}
