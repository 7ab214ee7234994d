//! Fare configuration.

/// Constants of the fare formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareConfig {
    /// Fare for any route up to the standard distance.
    pub base_fare: u64,

    /// Distance covered by the base fare.
    pub standard_distance: u64,

    /// Length of each band charged beyond the standard distance.
    pub charge_unit_distance: u64,

    /// Charge per distance band.
    pub charge_per_unit: u64,

    /// Flat amount deducted before a rider's discount is applied.
    pub discount_deduction: u64,
}

impl FareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        base_fare: u64,
        standard_distance: u64,
        charge_unit_distance: u64,
        charge_per_unit: u64,
        discount_deduction: u64,
    ) -> Self {
        Self {
            base_fare,
            standard_distance,
            charge_unit_distance,
            charge_per_unit,
            discount_deduction,
        }
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            standard_distance: 10,
            charge_unit_distance: 5,
            charge_per_unit: 100,
            discount_deduction: 350,
        }
    }
}
