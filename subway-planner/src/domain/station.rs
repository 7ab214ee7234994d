//! Station identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a station.
///
/// Stations are the vertices of the network graph. Two stations are the same
/// station exactly when their ids are equal; display attributes play no part.
///
/// # Examples
///
/// ```
/// use subway_planner::domain::StationId;
///
/// let gangnam = StationId::new(1);
/// assert_eq!(gangnam.get(), 1);
/// assert_eq!(gangnam, StationId::new(1));
/// assert_ne!(gangnam, StationId::new(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Create a station id from its raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A station registered with the network.
///
/// Owned by the station registry; topology and path finding only ever see
/// the [`StationId`]. Two stations are equal when their ids are.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    /// Create a new station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}
