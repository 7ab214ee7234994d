//! Shortest path search over the line graph.
//!
//! Dijkstra over the multigraph built by [`LineGraph`]. Every edge leaving a
//! station is relaxed on its own, so when several lines join the same two
//! stations the shortest of them wins.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{Distance, Line, LineId, StationId};

use super::graph::{Edge, LineGraph};

/// Error from shortest path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target are the same station ({0})")]
    SameSourceTarget(StationId),

    /// No route joins the two stations
    #[error("no route connects {from} to {to}")]
    SourceTargetNotConnected { from: StationId, to: StationId },
}

/// One ridden section of a path, in the direction it was travelled.
#[derive(Debug, Clone, Copy)]
pub struct PathSegment<'a> {
    pub from: StationId,
    pub to: StationId,
    pub distance: Distance,
    pub line: &'a Line,
}

impl<'a> From<Edge<'a>> for PathSegment<'a> {
    fn from(edge: Edge<'a>) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            distance: edge.distance,
            line: edge.line,
        }
    }
}

/// The shortest route between two stations.
#[derive(Debug, Clone)]
pub struct PathResult<'a> {
    /// Stations visited, source first and target last.
    pub stations: Vec<StationId>,

    /// Sum of the distances of all segments.
    pub total_distance: u64,

    /// Sections ridden, in travel order, each tagged with its line.
    pub segments: Vec<PathSegment<'a>>,
}

impl<'a> PathResult<'a> {
    /// The distinct lines ridden, in the order first boarded.
    pub fn lines(&self) -> Vec<&'a Line> {
        let mut lines: Vec<&'a Line> = Vec::new();
        for segment in &self.segments {
            if !lines.iter().any(|l| l.id() == segment.line.id()) {
                lines.push(segment.line);
            }
        }
        lines
    }

    /// Ids of the distinct lines ridden, in the order first boarded.
    pub fn line_ids(&self) -> Vec<LineId> {
        self.lines().iter().map(|l| l.id()).collect()
    }

    /// The highest surcharge among the lines ridden, if any line has one.
    pub fn max_extra_charge(&self) -> Option<u64> {
        self.segments
            .iter()
            .filter_map(|segment| segment.line.extra_charge())
            .max()
    }
}

/// Shortest path finder over one snapshot of the network.
pub struct PathFinder<'a> {
    graph: LineGraph<'a>,
}

impl<'a> PathFinder<'a> {
    /// Create a finder over an already-built graph.
    pub fn new(graph: LineGraph<'a>) -> Self {
        Self { graph }
    }

    /// Build the graph from `lines` and create a finder over it.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a Line>,
    {
        Self::new(LineGraph::build(lines))
    }

    pub fn graph(&self) -> &LineGraph<'a> {
        &self.graph
    }

    /// Find the shortest path from `source` to `target`.
    ///
    /// Equal-length alternatives are resolved deterministically: stations
    /// are settled in (distance, station id) order and an edge only replaces
    /// a known route if it is strictly shorter, so the first-built section
    /// wins a tie.
    pub fn shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<PathResult<'a>, PathError> {
        if source == target {
            return Err(PathError::SameSourceTarget(source));
        }

        let not_connected = PathError::SourceTargetNotConnected {
            from: source,
            to: target,
        };

        if !self.graph.contains(source) || !self.graph.contains(target) {
            debug!(%source, %target, "Source or target not in graph");
            return Err(not_connected);
        }

        let mut best: HashMap<StationId, u64> = HashMap::new();
        let mut via: HashMap<StationId, Edge<'a>> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<(u64, StationId)>> = BinaryHeap::new();

        best.insert(source, 0);
        heap.push(Reverse((0, source)));

        while let Some(Reverse((dist, station))) = heap.pop() {
            if station == target {
                break;
            }
            if best.get(&station).is_some_and(|&known| dist > known) {
                continue;
            }

            for edge in self.graph.edges_from(station) {
                let candidate = dist + u64::from(edge.distance);
                let improves = best.get(&edge.to).is_none_or(|&known| candidate < known);
                if improves {
                    trace!(
                        from = %edge.from,
                        to = %edge.to,
                        line = %edge.line.id(),
                        distance = candidate,
                        "Relaxed edge"
                    );
                    best.insert(edge.to, candidate);
                    via.insert(edge.to, *edge);
                    heap.push(Reverse((candidate, edge.to)));
                }
            }
        }

        let Some(&total_distance) = best.get(&target) else {
            debug!(%source, %target, "Target unreachable");
            return Err(not_connected);
        };

        let segments = Self::trace_back(&via, source, target);
        let mut stations = Vec::with_capacity(segments.len() + 1);
        stations.push(source);
        stations.extend(segments.iter().map(|s| s.to));

        debug!(
            %source,
            %target,
            total_distance,
            stops = stations.len(),
            "Found shortest path"
        );

        Ok(PathResult {
            stations,
            total_distance,
            segments,
        })
    }

    /// Walk the predecessor edges back from `target` to `source`.
    fn trace_back(
        via: &HashMap<StationId, Edge<'a>>,
        source: StationId,
        target: StationId,
    ) -> Vec<PathSegment<'a>> {
        let mut segments = Vec::new();
        let mut current = target;
        while current != source {
            let Some(edge) = via.get(&current) else {
                break;
            };
            segments.push(PathSegment::from(*edge));
            current = edge.from;
        }
        segments.reverse();
        segments
    }
}

/// Find the shortest path between two stations across all `lines`.
///
/// Builds a fresh graph from the lines' current topology for this one query.
pub fn find_shortest_path<'a, I>(
    lines: I,
    source: StationId,
    target: StationId,
) -> Result<PathResult<'a>, PathError>
where
    I: IntoIterator<Item = &'a Line>,
{
    PathFinder::from_lines(lines).shortest_path(source, target)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
