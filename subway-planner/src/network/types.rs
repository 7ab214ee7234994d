//! Network file DTOs.
//!
//! These types map directly to the JSON network description. They carry raw
//! numbers; validation happens on conversion into domain types.

use serde::{Deserialize, Serialize};

/// A whole network: its stations and the lines running between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFile {
    pub stations: Vec<StationDto>,
    pub lines: Vec<LineDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: u64,
    pub name: String,
}

/// A line and its sections.
///
/// Sections are added in the order listed, so each one after the first must
/// share exactly one station with those before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub id: u64,
    pub name: String,

    /// Surcharge for riding this line, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_charge: Option<u64>,

    pub sections: Vec<SectionDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub up: u64,
    pub down: u64,
    pub distance: u32,
}
