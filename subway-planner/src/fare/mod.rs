//! Fare calculation.
//!
//! A fare is a base fare, plus the highest surcharge among the lines ridden,
//! plus a distance surcharge beyond the standard distance. A rider with a
//! discount gets a flat deduction and then the percentage taken off.

mod calculator;
mod config;
mod discount;

pub use calculator::{FareBreakdown, FareCalculator, FareError, calculate_fare};
pub use config::FareConfig;
pub use discount::{Discount, InvalidDiscount};
