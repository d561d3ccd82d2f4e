use super::*;

fn abc_graph() -> Graph<i32> {
    let mut graph = Graph::new();
    graph.add_vertex("A", 1).unwrap();
    graph.add_vertex("B", 2).unwrap();
    graph.add_vertex("C", 3).unwrap();
    graph
}

fn neighbor_ids<T>(graph: &Graph<T>, id: &str) -> Vec<String> {
    graph
        .get_vertex(id)
        .unwrap()
        .neighbors()
        .iter()
        .map(|handle| graph.vertex(*handle).unwrap().id().to_string())
        .collect()
}

#[test]
fn test_add_vertex_and_retrieve() {
    let mut graph = Graph::new();
    let vertex = graph.add_vertex("A", 1).unwrap();
    assert_eq!(vertex.id(), "A");
    assert_eq!(vertex.handle(), VertexId::new(0));

    let vertex = graph.get_vertex("A").unwrap();
    assert_eq!(*vertex.data(), 1);
    assert!(graph.get_vertex("Z").is_none());
}

#[test]
fn test_add_vertex_rejects_duplicate_id() {
    let mut graph = Graph::new();
    graph.add_vertex("A", 1).unwrap();

    let err = graph.add_vertex("A", 2).unwrap_err();
    assert!(matches!(err, GraphError::VertexAlreadyExists { ref id } if id == "A"));
    assert_eq!(graph.len(), 1);
    assert_eq!(*graph.get_vertex("A").unwrap().data(), 1);
}

#[test]
fn test_matrices_stay_square_as_vertices_are_added() {
    let mut graph: Graph<()> = Graph::weighted();
    for (count, id) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        graph.add_vertex(id, ()).unwrap();
        let adjacency = graph.adjacency_matrix();
        let weights = graph.weights_matrix().unwrap();
        assert_eq!(adjacency.dim(), count + 1);
        assert_eq!(weights.dim(), count + 1);
        assert!(adjacency.rows().iter().all(|row| row.len() == count + 1));
        assert!(weights.rows().iter().all(|row| row.len() == count + 1));
    }
}

#[test]
fn test_unweighted_graph_has_no_weight_matrix() {
    let graph = abc_graph();
    assert!(graph.weights_matrix().is_none());
    assert_eq!(graph.kind(), EdgeKind::Unweighted);
}

#[test]
fn test_add_edge_links_both_vertices() {
    let mut graph = abc_graph();
    graph.add_edge("A", "B").unwrap();

    assert_eq!(neighbor_ids(&graph, "A"), vec!["B"]);
    assert_eq!(neighbor_ids(&graph, "B"), vec!["A"]);
    assert!(graph.has_edge("A", "B").unwrap());
    assert!(graph.has_edge("B", "A").unwrap());
    assert!(!graph.has_edge("A", "C").unwrap());
}

#[test]
fn test_add_edge_with_missing_vertex() {
    let mut graph = Graph::new();
    graph.add_vertex("A", 1).unwrap();

    assert!(matches!(
        graph.add_edge("A", "B"),
        Err(GraphError::VertexNotFound { ref id }) if id == "B"
    ));
    assert!(matches!(
        graph.add_edge("B", "A"),
        Err(GraphError::VertexNotFound { ref id }) if id == "B"
    ));
    assert!(graph.get_vertex("A").unwrap().neighbors().is_empty());
}

#[test]
fn test_repeated_edge_is_duplicate_neighbor() {
    let mut graph = abc_graph();
    graph.add_edge("A", "B").unwrap();

    assert!(matches!(
        graph.add_edge("A", "B"),
        Err(GraphError::DuplicateNeighbor { .. })
    ));
    assert!(matches!(
        graph.add_edge("B", "A"),
        Err(GraphError::DuplicateNeighbor { .. })
    ));
    assert_eq!(neighbor_ids(&graph, "A"), vec!["B"]);
    assert_eq!(neighbor_ids(&graph, "B"), vec!["A"]);
}

#[test]
fn test_self_edge_is_rejected() {
    let mut graph = abc_graph();
    assert!(matches!(
        graph.add_edge("A", "A"),
        Err(GraphError::SelfLoop { .. })
    ));
    assert!(!graph.has_edge("A", "A").unwrap());
}

#[test]
fn test_cyclic_graph() {
    let mut graph = abc_graph();
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("B", "C").unwrap();
    graph.add_edge("C", "A").unwrap();

    assert_eq!(neighbor_ids(&graph, "A"), vec!["B", "C"]);
    assert_eq!(neighbor_ids(&graph, "B"), vec!["A", "C"]);
    assert_eq!(neighbor_ids(&graph, "C"), vec!["B", "A"]);
}

#[test]
fn test_disconnected_subgraphs() {
    let mut graph = Graph::new();
    for (id, data) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
        graph.add_vertex(id, data).unwrap();
    }
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("C", "D").unwrap();

    assert_eq!(neighbor_ids(&graph, "A"), vec!["B"]);
    assert_eq!(neighbor_ids(&graph, "D"), vec!["C"]);
    assert!(!graph.has_edge("A", "C").unwrap());
    assert!(!graph.has_edge("B", "D").unwrap());
}

#[test]
fn test_replace_data_keeps_edges() {
    let mut graph = abc_graph();
    graph.add_edge("A", "B").unwrap();
    graph.replace_data("A", 10).unwrap();

    assert_eq!(*graph.get_vertex("A").unwrap().data(), 10);
    assert_eq!(neighbor_ids(&graph, "A"), vec!["B"]);
    assert_eq!(neighbor_ids(&graph, "B"), vec!["A"]);
}

#[test]
fn test_replace_data_for_missing_vertex() {
    let mut graph: Graph<i32> = Graph::new();
    assert!(matches!(
        graph.replace_data("Z", 100),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn test_unweighted_graph_renders_connections_and_adjacency() {
    let mut graph = abc_graph();
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("A", "C").unwrap();

    assert_eq!(
        graph.to_string(),
        "Graph connections:\nA: B C\nB: A\nC: A\n\nAdjacencyMatrix:\n   A  B  C\nA [0, 1, 1]\nB [1, 0, 0]\nC [1, 0, 0]\n"
    );
}

#[test]
fn test_directed_variant_links_like_base_graph() {
    let mut graph = Graph::directed();
    graph.add_vertex("A", 1).unwrap();
    graph.add_vertex("B", 2).unwrap();
    graph.add_edge("A", "B").unwrap();

    assert_eq!(neighbor_ids(&graph, "B"), vec!["A"]);
    assert!(graph.has_edge("B", "A").unwrap());
}

#[test]
fn test_empty_graph_renders_headers_only() {
    let graph: Graph<i32> = Graph::new();
    assert_eq!(
        graph.to_string(),
        "Graph connections:\n\nAdjacencyMatrix:\n   "
    );
}

mod weighted {
    use super::*;

    fn weighted_abc() -> Graph<i32> {
        let mut graph = Graph::weighted();
        graph.add_vertex("A", 1).unwrap();
        graph.add_vertex("B", 2).unwrap();
        graph.add_vertex("C", 3).unwrap();
        graph
    }

    #[test]
    fn test_weighted_edge_is_one_way() {
        let mut graph = weighted_abc();
        graph.add_weighted_edge("A", "B", 1.0).unwrap();

        assert_eq!(neighbor_ids(&graph, "A"), vec!["B"]);
        assert!(neighbor_ids(&graph, "B").is_empty());
        assert_eq!(graph.get_weight("A", "B").unwrap(), 1.0);
        assert_eq!(graph.get_weight("B", "A").unwrap(), 0.0);
        assert!(!graph.has_edge("B", "A").unwrap());
    }

    #[test]
    fn test_reverse_edge_can_be_added_separately() {
        let mut graph = weighted_abc();
        graph.add_weighted_edge("A", "B", 2.0).unwrap();
        graph.add_weighted_edge("B", "A", 7.0).unwrap();

        assert_eq!(graph.get_weight("A", "B").unwrap(), 2.0);
        assert_eq!(graph.get_weight("B", "A").unwrap(), 7.0);
    }

    #[test]
    fn test_missing_or_zero_weight_is_undefined() {
        let mut graph = weighted_abc();

        assert!(matches!(
            graph.add_weighted_edge("A", "B", None),
            Err(GraphError::WeightUndefined)
        ));
        assert!(matches!(
            graph.add_weighted_edge("A", "B", 0.0),
            Err(GraphError::WeightUndefined)
        ));
        assert!(matches!(
            graph.add_weighted_edge("A", "B", f64::NAN),
            Err(GraphError::WeightUndefined)
        ));
        assert!(matches!(
            graph.add_edge("A", "B"),
            Err(GraphError::WeightUndefined)
        ));
        assert!(neighbor_ids(&graph, "A").is_empty());
    }

    #[test]
    fn test_weight_is_checked_before_vertices() {
        let mut graph = weighted_abc();
        assert!(matches!(
            graph.add_weighted_edge("A", "Z", None),
            Err(GraphError::WeightUndefined)
        ));
        assert!(matches!(
            graph.add_weighted_edge("A", "Z", 1.0),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn test_negative_and_infinite_weights_are_rejected() {
        let mut graph = weighted_abc();
        assert!(matches!(
            graph.add_weighted_edge("A", "B", -1.0),
            Err(GraphError::NegativeWeight { .. })
        ));
        assert!(matches!(
            graph.add_weighted_edge("A", "B", f64::INFINITY),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_weighted_edge_on_unweighted_graph() {
        let mut graph = abc_graph();
        assert!(matches!(
            graph.add_weighted_edge("A", "B", 3.0),
            Err(GraphError::WeightedEdgeOnUnweightedGraph)
        ));
    }

    #[test]
    fn test_get_weight_with_missing_vertex() {
        let graph = weighted_abc();
        assert!(matches!(
            graph.get_weight("A", "Z"),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn test_weights_only_where_adjacency_is_set() {
        let mut graph = weighted_abc();
        graph.add_weighted_edge("A", "B", 3.0).unwrap();
        graph.add_weighted_edge("C", "A", 4.5).unwrap();

        let adjacency = graph.adjacency_matrix();
        let weights = graph.weights_matrix().unwrap();
        for row in 0..3 {
            for col in 0..3 {
                if weights.get(row, col) != 0.0 {
                    assert_eq!(adjacency.get(row, col), 1);
                }
            }
        }
    }

    #[test]
    fn test_undirected_orientation_writes_both_directions() {
        let mut graph = Graph::with_kind(EdgeKind::Weighted(Orientation::Undirected));
        graph.add_vertex("A", 1).unwrap();
        graph.add_vertex("B", 2).unwrap();
        graph.add_weighted_edge("A", "B", 5.0).unwrap();

        assert_eq!(graph.get_weight("B", "A").unwrap(), 5.0);
        assert_eq!(neighbor_ids(&graph, "B"), vec!["A"]);
        assert!(matches!(
            graph.add_weighted_edge("B", "A", 1.0),
            Err(GraphError::DuplicateNeighbor { .. })
        ));
    }

    #[test]
    fn test_unweighted_weight_reports_adjacency() {
        let mut graph = abc_graph();
        graph.add_edge("A", "B").unwrap();
        assert_eq!(graph.get_weight("A", "B").unwrap(), 1.0);
        assert_eq!(graph.get_weight("B", "C").unwrap(), 0.0);
    }

    #[test]
    fn test_weighted_graph_renders_weights_block() {
        let mut graph = weighted_abc();
        graph.add_weighted_edge("A", "B", 2.0).unwrap();
        graph.add_weighted_edge("A", "C", 1.0).unwrap();

        assert_eq!(
            graph.to_string(),
            "Graph connections:\nA: B C\nB: \nC: \n\nAdjacencyMatrix:\n   A  B  C\nA [0, 1, 1]\nB [0, 0, 0]\nC [0, 0, 0]\n\nWeightsMatrix:\n   A  B  C\nA [0, 2, 1]\nB [0, 0, 0]\nC [0, 0, 0]\n"
        );
    }

    #[test]
    fn test_fractional_weights_render_shortest_form() {
        let mut graph = Graph::weighted();
        graph.add_vertex("x", ()).unwrap();
        graph.add_vertex("y", ()).unwrap();
        graph.add_weighted_edge("x", "y", 2.5).unwrap();

        assert!(graph.to_string().ends_with("WeightsMatrix:\n   x  y\nx [0, 2.5]\ny [0, 0]\n"));
    }
}
