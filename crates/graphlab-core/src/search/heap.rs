//! Binary-heap selection strategy

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::{Graph, VertexId};
use crate::search::dijkstra::SearchState;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub vertex: VertexId,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Run Dijkstra from `start`, selecting vertices from a min-heap.
///
/// Ties on distance go to the earlier-inserted vertex, matching the
/// linear-scan order.
pub(crate) fn run<T>(graph: &Graph<T>, start: VertexId) -> SearchState {
    let mut state = SearchState::new(graph.len(), start);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: start,
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry {
        vertex: current,
        distance,
    })) = heap.pop()
    {
        state.stats.scanned += 1;

        // Stale entry: a shorter distance was recorded after this push.
        if state.visited[current.index()] || distance > state.distances[current.index()] {
            continue;
        }

        state.stats.selections += 1;
        state.relax(graph, current, |neighbor, candidate| {
            heap.push(Reverse(HeapEntry {
                vertex: neighbor,
                distance: candidate,
            }));
        });
        state.visited[current.index()] = true;
    }

    state
}
