//! Network loading error types.

use crate::domain::{InvalidDistance, InvalidSection, LineId, SectionError, StationId};

/// Errors from loading or saving a network description.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading or writing the network file failed
    #[error("network file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid network description
    #[error("invalid network JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("duplicate station {0}")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("duplicate line {0}")]
    DuplicateLine(LineId),

    /// A line was described without any sections
    #[error("line {0} has no sections")]
    EmptyLine(LineId),

    /// A section names a station that is not registered
    #[error("line {line} refers to unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// A line's surcharge is present but zero
    #[error("line {0} has a zero extra charge")]
    ZeroExtraCharge(LineId),

    #[error("line {line}: {source}")]
    InvalidDistance {
        line: LineId,
        source: InvalidDistance,
    },

    #[error("line {line}: {source}")]
    InvalidSection { line: LineId, source: InvalidSection },

    /// A section could not be added to its line
    #[error("line {line}: {source}")]
    Topology { line: LineId, source: SectionError },
}
