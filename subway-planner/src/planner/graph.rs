//! Network graph assembled from line topologies.
//!
//! The graph is rebuilt for every query from whatever the lines look like
//! right now; nothing is cached between queries.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Distance, Line, StationId};

/// One traversable direction of a section, tagged with its line.
#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
    pub from: StationId,
    pub to: StationId,
    pub distance: Distance,
    pub line: &'a Line,
}

/// Weighted multigraph over every line's sections.
///
/// Vertices are stations; each section contributes one edge, usable in
/// either direction. Sections from different lines between the same pair of
/// stations stay separate edges with their own distances.
#[derive(Debug, Clone, Default)]
pub struct LineGraph<'a> {
    adjacency: HashMap<StationId, Vec<Edge<'a>>>,
    section_count: usize,
}

impl<'a> LineGraph<'a> {
    /// Build the graph from the current topology of `lines`.
    pub fn build<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a Line>,
    {
        let mut graph = Self::default();

        for line in lines {
            for section in line.sections() {
                graph.insert(Edge {
                    from: section.up(),
                    to: section.down(),
                    distance: section.distance(),
                    line,
                });
            }
        }

        debug!(
            stations = graph.station_count(),
            sections = graph.section_count,
            "Built line graph"
        );

        graph
    }

    /// Whether `station` is a vertex of the graph.
    pub fn contains(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// All edges leaving `station`, in the order the sections were added.
    pub fn edges_from(&self, station: StationId) -> &[Edge<'a>] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of sections in the graph (each counted once, not per direction).
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    fn insert(&mut self, edge: Edge<'a>) {
        let reverse = Edge {
            from: edge.to,
            to: edge.from,
            ..edge
        };
        self.adjacency.entry(edge.from).or_default().push(edge);
        self.adjacency.entry(reverse.from).or_default().push(reverse);
        self.section_count += 1;
    }
}
