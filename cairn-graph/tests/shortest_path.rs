use cairn_graph::{shortest_path, AdjacencyGraph, Direction, Graph, ShortestPath, UnknownVertex};

/// Four vertices whose cheapest A -> D route hops through every other
/// vertex: both shortcuts (A -> C direct, B -> D direct) cost more than
/// the long way around.
fn diamond() -> AdjacencyGraph<&'static str> {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("A", "C", 4.0);
    graph.add_edge("B", "C", 2.0);
    graph.add_edge("B", "D", 5.0);
    graph.add_edge("C", "D", 1.0);
    graph
}

#[test]
fn cheaper_detour_beats_direct_edge() {
    let graph = diamond();

    let found = shortest_path(&graph, &"A", &"D", Direction::Directed)
        .unwrap()
        .expect("D is reachable");
    assert_eq!(found.vertices(), ["A", "B", "C", "D"]);
    assert_eq!(found.distance(), 4.0);
}

#[test]
fn source_equals_target_skips_traversal() {
    struct Untouchable;

    impl Graph for Untouchable {
        type Vertex = u32;
        type Error = ();
        type Edges<'a> = std::iter::Empty<(u32, f64)> where Self: 'a;

        fn edges_from(&self, _: &u32) -> Result<Self::Edges<'_>, ()> {
            panic!("graph must not be consulted");
        }

        fn edges_into(&self, _: &u32) -> Result<Self::Edges<'_>, ()> {
            panic!("graph must not be consulted");
        }
    }

    let found = shortest_path(&Untouchable, &7, &7, Direction::Directed)
        .unwrap()
        .expect("a vertex always reaches itself");
    assert_eq!(found.vertices(), [7]);
    assert_eq!(found.distance(), 0.0);
}

#[test]
fn unreachable_target_is_no_path() {
    let mut graph = diamond();
    graph.add_vertex("E");

    let found = shortest_path(&graph, &"A", &"E", Direction::Directed).unwrap();
    assert_eq!(found, None);
}

#[test]
fn unknown_target_is_no_path() {
    let graph = diamond();

    // "Z" was never registered; the search exhausts A's component and
    // reports no path rather than an error.
    let found = shortest_path(&graph, &"A", &"Z", Direction::Directed).unwrap();
    assert_eq!(found, None);
}

#[test]
fn undirected_walks_edges_backwards() {
    let graph = diamond();

    let found = shortest_path(&graph, &"D", &"A", Direction::Directed).unwrap();
    assert_eq!(found, None);

    let found = shortest_path(&graph, &"D", &"A", Direction::Undirected)
        .unwrap()
        .expect("undirected edges reach back to A");
    assert_eq!(found.vertices(), ["D", "C", "B", "A"]);
    assert_eq!(found.distance(), 4.0);
}

#[test]
fn unknown_source_error_propagates() {
    let graph = diamond();

    let err = shortest_path(&graph, &"Z", &"A", Direction::Directed).unwrap_err();
    assert_eq!(err, UnknownVertex("Z"));
}

#[test]
fn equal_cost_routes_agree_on_distance() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", 2.0);
    graph.add_edge("A", "C", 2.0);
    graph.add_edge("B", "D", 2.0);
    graph.add_edge("C", "D", 2.0);

    let found = shortest_path(&graph, &"A", &"D", Direction::Directed)
        .unwrap()
        .expect("D is reachable");
    assert_eq!(found.distance(), 4.0);

    let vertices = found.vertices();
    assert!(
        vertices == ["A", "B", "D"] || vertices == ["A", "C", "D"],
        "unexpected path: {vertices:?}"
    );
}

#[test]
fn zero_weight_edges_are_traversed() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", 0.0);
    graph.add_edge("B", "C", 0.0);
    graph.add_edge("A", "C", 0.5);

    let found = shortest_path(&graph, &"A", &"C", Direction::Directed)
        .unwrap()
        .expect("C is reachable");
    assert_eq!(found.vertices(), ["A", "B", "C"]);
    assert_eq!(found.distance(), 0.0);
}

#[test]
fn path_accessors_agree() {
    let graph = diamond();

    let found: ShortestPath<&str> = shortest_path(&graph, &"A", &"C", Direction::Directed)
        .unwrap()
        .expect("C is reachable");
    assert_eq!(found.distance(), 3.0);
    assert_eq!(found.vertices(), found.clone().into_vertices().as_slice());
}
