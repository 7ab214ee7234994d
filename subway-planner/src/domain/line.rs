//! Line type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Section, SectionError, Sections, StationId};

/// Opaque identifier of a line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Create a line id from its raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A named line and the track it runs on.
///
/// The line owns its [`Sections`] exclusively; all topology changes go
/// through [`Line::add_section`] and [`Line::remove_section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    extra_charge: Option<u64>,
    sections: Sections,
}

impl Line {
    /// Create a line running over a single first section.
    ///
    /// A surcharge of zero is stored as no surcharge.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        extra_charge: Option<u64>,
        first: Section,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            extra_charge: extra_charge.filter(|&charge| charge > 0),
            sections: Sections::new(first),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surcharge added to any fare whose route rides this line.
    pub fn extra_charge(&self) -> Option<u64> {
        self.extra_charge
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Add a section, splitting an existing one if it lands inside it.
    pub fn add_section(&mut self, section: Section) -> Result<(), SectionError> {
        self.sections.add(section)
    }

    /// Remove a station, merging its neighbouring sections if it is interior.
    pub fn remove_section(&mut self, station: StationId) -> Result<(), SectionError> {
        self.sections.remove(station)
    }

    /// The line's stops in travel order.
    pub fn stations(&self) -> Vec<StationId> {
        self.sections.stations()
    }

    /// Whether the line calls at `station`.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections.contains(station)
    }
}
