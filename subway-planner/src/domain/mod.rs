//! Domain types for the subway planner.
//!
//! This module contains the network model: stations, the sections of track
//! between them, and the lines that own those sections. All types enforce
//! their invariants at construction time, and a line's topology can only be
//! changed through operations that keep it a single unbranched path.

mod distance;
mod error;
mod line;
mod section;
mod sections;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use error::SectionError;
pub use line::{Line, LineId};
pub use section::{InvalidSection, Section};
pub use sections::Sections;
pub use station::{Station, StationId};
