//! Route planning over the whole network.
//!
//! Each query assembles a fresh weighted multigraph from every line's
//! current sections and runs Dijkstra over it. The resulting path keeps the
//! line of every section ridden, which fare calculation needs.

mod graph;
mod lines;
mod search;

pub use graph::{Edge, LineGraph};
pub use lines::{Lines, Route, RouteError};
pub use search::{PathError, PathFinder, PathResult, PathSegment, find_shortest_path};
