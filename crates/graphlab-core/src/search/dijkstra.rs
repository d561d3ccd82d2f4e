use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use crate::search::heap;
use crate::search::types::{SearchStats, Selection, ShortestPath};
use crate::trace_time;

/// Working state of one search. Created per call and dropped on return.
#[derive(Debug)]
pub(crate) struct SearchState {
    pub(crate) distances: Vec<f64>,
    pub(crate) visited: Vec<bool>,
    pub(crate) parents: Vec<Option<VertexId>>,
    pub(crate) stats: SearchStats,
}

impl SearchState {
    pub(crate) fn new(size: usize, start: VertexId) -> Self {
        let mut distances = vec![f64::INFINITY; size];
        distances[start.index()] = 0.0;
        Self {
            distances,
            visited: vec![false; size],
            parents: vec![None; size],
            stats: SearchStats::default(),
        }
    }

    /// Relax every edge leaving `current`, reporting each improved neighbor
    /// together with its new distance.
    pub(crate) fn relax<T>(
        &mut self,
        graph: &Graph<T>,
        current: VertexId,
        mut on_improve: impl FnMut(VertexId, f64),
    ) {
        let distance = self.distances[current.index()];
        for &neighbor in graph.neighbors_of(current) {
            let candidate = distance + graph.weight_between(current, neighbor);
            // Unreached vertices hold +inf, so any finite candidate improves them.
            if candidate < self.distances[neighbor.index()] {
                self.distances[neighbor.index()] = candidate;
                self.parents[neighbor.index()] = Some(current);
                self.stats.relaxations += 1;
                on_improve(neighbor, candidate);
            }
        }
    }

    /// Unvisited vertex with the smallest finite distance, scanning in graph
    /// enumeration order. The first minimum wins ties.
    fn closest_unvisited(&mut self) -> Option<VertexId> {
        self.stats.scanned += self.distances.len();

        let mut min_distance = f64::INFINITY;
        let mut closest = None;
        for (position, &distance) in self.distances.iter().enumerate() {
            if distance < min_distance && !self.visited[position] {
                min_distance = distance;
                closest = Some(VertexId::new(position));
            }
        }
        closest
    }
}

/// Shortest-path engine bound to one graph.
///
/// The engine holds no state between calls; every search builds its own
/// distance, visited and parent tables. Unweighted graphs are searched with a
/// uniform edge cost of 1.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'g, T> {
    graph: &'g Graph<T>,
    selection: Selection,
}

impl<'g, T> Dijkstra<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self::with_selection(graph, Selection::LinearScan)
    }

    pub fn with_selection(graph: &'g Graph<T>, selection: Selection) -> Self {
        Self { graph, selection }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Vertex ids of a minimum-weight path from `start` to `target`, both inclusive.
    pub fn search(&self, start: &str, target: &str) -> Result<Vec<String>> {
        Ok(self.find_path(start, target)?.vertices)
    }

    /// Like [`Dijkstra::search`], also reporting the path weight and work counters.
    #[tracing::instrument(skip(self), fields(selection = %self.selection, vertices = self.graph.len()))]
    pub fn find_path(&self, start: &str, target: &str) -> Result<ShortestPath> {
        let started = Instant::now();
        let start_handle = self.graph.handle_of(start)?;
        let target_handle = self.graph.handle_of(target)?;

        let state = self.run(start_handle);
        tracing::debug!(
            selections = state.stats.selections,
            relaxations = state.stats.relaxations,
            scanned = state.stats.scanned,
            "search_stats"
        );

        let vertices = self.build_path(&state.parents, start_handle, target_handle)?;
        trace_time!(started, "dijkstra_search", hops = vertices.len() - 1);

        Ok(ShortestPath {
            vertices,
            total_weight: state.distances[target_handle.index()],
            stats: state.stats,
        })
    }

    /// Best-known distance from `start` to every vertex, in insertion order.
    /// Unreachable vertices report `f64::INFINITY`.
    #[tracing::instrument(skip(self), fields(selection = %self.selection))]
    pub fn distances(&self, start: &str) -> Result<Vec<(String, f64)>> {
        let start_handle = self.graph.handle_of(start)?;
        let state = self.run(start_handle);

        Ok(self
            .graph
            .ids()
            .map(str::to_string)
            .zip(state.distances)
            .collect())
    }

    fn run(&self, start: VertexId) -> SearchState {
        match self.selection {
            Selection::LinearScan => self.run_linear_scan(start),
            Selection::BinaryHeap => heap::run(self.graph, start),
        }
    }

    fn run_linear_scan(&self, start: VertexId) -> SearchState {
        let mut state = SearchState::new(self.graph.len(), start);

        while let Some(current) = state.closest_unvisited() {
            state.stats.selections += 1;
            state.relax(self.graph, current, |_, _| {});
            state.visited[current.index()] = true;
        }

        state
    }

    fn build_path(
        &self,
        parents: &[Option<VertexId>],
        start: VertexId,
        target: VertexId,
    ) -> Result<Vec<String>> {
        let mut path = vec![self.graph.id_at(target).to_string()];
        let mut current = target;
        while current != start {
            current = match parents[current.index()] {
                Some(parent) => parent,
                None => {
                    return Err(GraphError::path_not_found(
                        self.graph.id_at(start),
                        self.graph.id_at(target),
                    ))
                }
            };
            path.push(self.graph.id_at(current).to_string());
        }

        path.reverse();
        Ok(path)
    }
}
