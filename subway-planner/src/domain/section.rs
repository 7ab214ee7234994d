//! Section value type.

use super::{Distance, StationId};

/// Error returned when constructing an invalid section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid section: {reason}")]
pub struct InvalidSection {
    reason: &'static str,
}

/// One directed track segment between two adjacent stations on a line.
///
/// A section always joins two different stations over a positive distance.
/// Its endpoints and distance only change when the owning
/// [`Sections`](super::Sections) splits or merges it, and those changes
/// produce a new value rather than mutating a shared one.
///
/// # Examples
///
/// ```
/// use subway_planner::domain::{Distance, Section, StationId};
///
/// let up = StationId::new(1);
/// let down = StationId::new(2);
/// let section = Section::new(up, down, Distance::new(10).unwrap()).unwrap();
/// assert_eq!(section.up(), up);
/// assert_eq!(section.down(), down);
///
/// // A section cannot loop back to its own station
/// assert!(Section::new(up, up, Distance::new(10).unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    up: StationId,
    down: StationId,
    distance: Distance,
}

impl Section {
    /// Create a section from `up` to `down`.
    pub fn new(up: StationId, down: StationId, distance: Distance) -> Result<Self, InvalidSection> {
        if up == down {
            return Err(InvalidSection {
                reason: "upstream and downstream stations must differ",
            });
        }
        Ok(Self { up, down, distance })
    }

    /// The upstream endpoint.
    pub fn up(&self) -> StationId {
        self.up
    }

    /// The downstream endpoint.
    pub fn down(&self) -> StationId {
        self.down
    }

    /// The track distance between the endpoints.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Whether `station` is either endpoint.
    pub fn touches(&self, station: StationId) -> bool {
        self.up == station || self.down == station
    }

    /// The remainder of this section after `prefix` has been cut from its
    /// upstream end: starts at `new_up`, shortened by `prefix`.
    ///
    /// Returns `None` when the remainder would not be a valid section.
    pub(crate) fn after_prefix(&self, new_up: StationId, prefix: Distance) -> Option<Section> {
        let distance = self.distance.checked_sub(prefix)?;
        Section::new(new_up, self.down, distance).ok()
    }

    /// The remainder of this section after `suffix` has been cut from its
    /// downstream end: ends at `new_down`, shortened by `suffix`.
    pub(crate) fn before_suffix(&self, new_down: StationId, suffix: Distance) -> Option<Section> {
        let distance = self.distance.checked_sub(suffix)?;
        Section::new(self.up, new_down, distance).ok()
    }

    /// Join `upstream` and `downstream`, which must meet at one station,
    /// into a single section spanning both.
    pub(crate) fn merge(upstream: &Section, downstream: &Section) -> Option<Section> {
        if upstream.down != downstream.up {
            return None;
        }
        let distance = upstream.distance.checked_add(downstream.distance)?;
        Section::new(upstream.up, downstream.down, distance).ok()
    }
}
