//! The network's lines, and route queries across all of them.

use serde::Serialize;

use crate::domain::{Line, LineId, StationId};
use crate::fare::{Discount, FareBreakdown, FareCalculator, FareError};

use super::search::{PathError, PathFinder, PathResult};

/// Why a route query produced no route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Fare(#[from] FareError),
}

/// Every line in the network.
#[derive(Debug, Clone, Default)]
pub struct Lines {
    lines: Vec<Line>,
}

impl Lines {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Mutable access for topology changes between queries.
    pub fn get_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.iter_mut().find(|l| l.id() == id)
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Lines calling at `station`.
    pub fn serving(&self, station: StationId) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |l| l.contains_station(station))
    }

    /// Shortest path over the current topology of every line.
    pub fn shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<PathResult<'_>, PathError> {
        PathFinder::from_lines(&self.lines).shortest_path(source, target)
    }

    /// Shortest path and its fare in one query.
    pub fn route(
        &self,
        source: StationId,
        target: StationId,
        discount: Option<Discount>,
        calculator: &FareCalculator,
    ) -> Result<Route, RouteError> {
        let path = self.shortest_path(source, target)?;
        let fare = calculator.breakdown(&path, discount)?;
        Ok(Route::new(&path, fare))
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl FromIterator<Line> for Lines {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Answer to a route query: where to ride, how far, and what it costs.
///
/// Owns its data, unlike [`PathResult`], so it can outlive the lines it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub stations: Vec<StationId>,
    pub distance: u64,
    pub lines: Vec<LineId>,
    pub fare: FareBreakdown,
}

impl Route {
    pub fn new(path: &PathResult<'_>, fare: FareBreakdown) -> Self {
        Self {
            stations: path.stations.clone(),
            distance: path.total_distance,
            lines: path.line_ids(),
            fare,
        }
    }
}
