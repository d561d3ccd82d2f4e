//! Uninformed traversal over neighbor sets
//!
//! Both walks visit each vertex at most once and follow neighbor links in
//! the order they were added. Breadth-first uses a FIFO queue, depth-first a
//! LIFO stack; nothing else differs.

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::collections::{Queue, Stack};
use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId};
use crate::search::types::Order;

/// Pending-vertex container driving a walk
trait Frontier {
    fn put(&mut self, handle: VertexId);
    fn take(&mut self) -> Option<VertexId>;
}

impl Frontier for Queue<VertexId> {
    fn put(&mut self, handle: VertexId) {
        self.enqueue(handle);
    }

    fn take(&mut self) -> Option<VertexId> {
        self.dequeue()
    }
}

impl Frontier for Stack<VertexId> {
    fn put(&mut self, handle: VertexId) {
        self.push(handle);
    }

    fn take(&mut self) -> Option<VertexId> {
        self.pop()
    }
}

/// Walk from `start` until `visit` breaks or the frontier drains.
/// Returns true if `visit` broke.
fn walk<T>(
    graph: &Graph<T>,
    start: VertexId,
    mut frontier: impl Frontier,
    mut visit: impl FnMut(&Vertex<T>) -> ControlFlow<()>,
) -> bool {
    let mut visited: HashSet<VertexId> = HashSet::new();
    frontier.put(start);

    while let Some(handle) = frontier.take() {
        if !visited.insert(handle) {
            continue;
        }
        let Some(vertex) = graph.vertex(handle) else {
            continue;
        };
        if visit(vertex).is_break() {
            return true;
        }
        for &neighbor in vertex.neighbors() {
            frontier.put(neighbor);
        }
    }

    false
}

fn walk_in_order<T>(
    graph: &Graph<T>,
    start: VertexId,
    order: Order,
    visit: impl FnMut(&Vertex<T>) -> ControlFlow<()>,
) -> bool {
    match order {
        Order::BreadthFirst => walk(graph, start, Queue::new(), visit),
        Order::DepthFirst => walk(graph, start, Stack::new(), visit),
    }
}

/// Ids reachable from `start`, in the order the walk reaches them.
#[tracing::instrument(skip(graph))]
pub fn visit_order<T>(graph: &Graph<T>, start: &str, order: Order) -> Result<Vec<String>> {
    let start = graph.handle_of(start)?;
    let mut seen = Vec::new();
    walk_in_order(graph, start, order, |vertex| {
        seen.push(vertex.id().to_string());
        ControlFlow::Continue(())
    });
    tracing::debug!(visited = seen.len(), "traversal_complete");
    Ok(seen)
}

/// Whether any vertex reachable from `start` carries data matching `predicate`.
/// Stops at the first match.
pub fn contains<T>(
    graph: &Graph<T>,
    start: &str,
    order: Order,
    mut predicate: impl FnMut(&T) -> bool,
) -> Result<bool> {
    let start = graph.handle_of(start)?;
    Ok(walk_in_order(graph, start, order, |vertex| {
        if predicate(vertex.data()) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }))
}

pub fn breadth_first_search<T>(
    graph: &Graph<T>,
    start: &str,
    predicate: impl FnMut(&T) -> bool,
) -> Result<bool> {
    contains(graph, start, Order::BreadthFirst, predicate)
}

pub fn depth_first_search<T>(
    graph: &Graph<T>,
    start: &str,
    predicate: impl FnMut(&T) -> bool,
) -> Result<bool> {
    contains(graph, start, Order::DepthFirst, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    /// A - B, A - C, B - D, D - E
    fn chain() -> Graph<i32> {
        let mut graph = Graph::new();
        for (id, data) in [("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5)] {
            graph.add_vertex(id, data).unwrap();
        }
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("B", "D").unwrap();
        graph.add_edge("D", "E").unwrap();
        graph
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut graph = Graph::new();
        graph.add_vertex("A", 1).unwrap();

        assert!(breadth_first_search(&graph, "A", |d| *d == 1).unwrap());
        assert!(!breadth_first_search(&graph, "A", |d| *d == 2).unwrap());
        assert!(depth_first_search(&graph, "A", |d| *d == 1).unwrap());
        assert!(!depth_first_search(&graph, "A", |d| *d == 2).unwrap());
    }

    #[test]
    fn test_connected_graph_search() {
        let graph = chain();
        for data in [1, 2, 5] {
            assert!(breadth_first_search(&graph, "A", |d| *d == data).unwrap());
            assert!(depth_first_search(&graph, "A", |d| *d == data).unwrap());
        }
        assert!(!breadth_first_search(&graph, "A", |d| *d == 9).unwrap());
    }

    #[test]
    fn test_search_from_far_end_of_undirected_graph() {
        let graph = chain();
        for data in [1, 2, 3] {
            assert!(breadth_first_search(&graph, "E", |d| *d == data).unwrap());
            assert!(depth_first_search(&graph, "E", |d| *d == data).unwrap());
        }
    }

    #[test]
    fn test_breadth_first_order() {
        let graph = chain();
        assert_eq!(
            visit_order(&graph, "A", Order::BreadthFirst).unwrap(),
            vec!["A", "B", "C", "D", "E"]
        );
    }

    #[test]
    fn test_depth_first_order_takes_last_neighbor_first() {
        let graph = chain();
        assert_eq!(
            visit_order(&graph, "A", Order::DepthFirst).unwrap(),
            vec!["A", "C", "B", "D", "E"]
        );
    }

    #[test]
    fn test_walk_follows_directed_weighted_edges_only() {
        let mut graph = Graph::weighted();
        for id in ["x", "y", "z"] {
            graph.add_vertex(id, ()).unwrap();
        }
        graph.add_weighted_edge("x", "y", 1.0).unwrap();
        graph.add_weighted_edge("z", "x", 1.0).unwrap();

        assert_eq!(
            visit_order(&graph, "x", Order::BreadthFirst).unwrap(),
            vec!["x", "y"]
        );
    }

    #[test]
    fn test_search_stops_at_first_match() {
        let graph = chain();
        let mut inspected = 0;
        let found = contains(&graph, "A", Order::BreadthFirst, |d| {
            inspected += 1;
            *d == 2
        })
        .unwrap();
        assert!(found);
        assert_eq!(inspected, 2);
    }

    #[test]
    fn test_missing_start_vertex() {
        let graph = chain();
        assert!(matches!(
            visit_order(&graph, "Z", Order::DepthFirst),
            Err(GraphError::VertexNotFound { .. })
        ));
    }
}
