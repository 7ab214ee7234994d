//! A loaded network: station registry, lines and fare rules together.
//!
//! The JSON file format lives in [`types`]; [`convert`] turns it into
//! validated domain values.

pub mod convert;
mod error;
pub mod types;

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::{Station, StationId};
use crate::fare::{Discount, FareCalculator};
use crate::planner::{Lines, Route, RouteError};

pub use convert::{convert_network, to_network_file};
pub use error::NetworkError;
pub use types::NetworkFile;

/// Stations, lines and the fare calculator for one network.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    lines: Lines,
    calculator: FareCalculator,
}

impl Network {
    /// Create a network with the standard fare rules.
    pub fn new(stations: impl IntoIterator<Item = Station>, lines: Lines) -> Self {
        Self {
            stations: stations.into_iter().map(|s| (s.id, s)).collect(),
            lines,
            calculator: FareCalculator::default(),
        }
    }

    /// Use `calculator` for fares instead of the standard rules.
    pub fn with_calculator(mut self, calculator: FareCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Parse a network from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        convert_network(&file)
    }

    /// Load a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let network = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            stations = network.stations.len(),
            lines = network.lines.len(),
            "Loaded network"
        );
        Ok(network)
    }

    /// Write the network to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetworkError> {
        let json = serde_json::to_string_pretty(&to_network_file(self))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// All registered stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Find a station by numeric id or by name (case-insensitive).
    ///
    /// If several stations share a name, the one with the lowest id wins.
    pub fn find_station(&self, query: &str) -> Option<&Station> {
        let query = query.trim();
        if let Ok(id) = query.parse::<u64>()
            && let Some(station) = self.stations.get(&StationId::new(id))
        {
            return Some(station);
        }

        self.stations
            .values()
            .filter(|s| s.name.eq_ignore_ascii_case(query))
            .min_by_key(|s| s.id)
    }

    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    /// Mutable access for adding or removing sections between queries.
    pub fn lines_mut(&mut self) -> &mut Lines {
        &mut self.lines
    }

    pub fn calculator(&self) -> &FareCalculator {
        &self.calculator
    }

    /// Shortest route between two stations and its fare.
    pub fn route(
        &self,
        source: StationId,
        target: StationId,
        discount: Option<Discount>,
    ) -> Result<Route, RouteError> {
        self.lines.route(source, target, discount, &self.calculator)
    }
}
