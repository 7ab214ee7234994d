//! Domain error types.
//!
//! These errors represent rejected topology changes. Every one of them is a
//! caller-input error: the line is left exactly as it was before the call.

use super::{Distance, StationId};

/// Errors from adding or removing sections on a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Both endpoints of the new section are already on the line
    #[error("stations {up} and {down} are both already registered on the line")]
    AlreadyRegisteredStation { up: StationId, down: StationId },

    /// Neither endpoint of the new section is on the line
    #[error("neither {up} nor {down} is registered on the line")]
    UnregisteredStation { up: StationId, down: StationId },

    /// The line is down to its last section
    #[error("cannot remove a station from a line with only one section")]
    NotFoundRemoveStation,

    /// The station is not an endpoint of any section on the line
    #[error("station {0} is not on the line")]
    NotMatchRemoveStation(StationId),

    /// Splitting would leave the existing section with no length
    #[error("a section of length {requested} cannot split a section of length {existing}")]
    InvalidSectionDistance {
        existing: Distance,
        requested: Distance,
    },

    /// Merging two sections overflowed the distance range
    #[error("merged section distance overflows")]
    DistanceOverflow,
}
