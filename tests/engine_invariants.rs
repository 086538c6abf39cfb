use apsp_dp::{AdjacencyMatrix, ApspError, FloydWarshall};

#[test]
fn empty_graph_has_empty_outputs() {
    let data = FloydWarshall::new().compute(&AdjacencyMatrix::new(0).unwrap());
    assert_eq!(data.cost_matrix().num_nodes(), 0);
    assert_eq!(data.parent_matrix().num_nodes(), 0);
    assert!(!data.has_negative_cycle());
    assert_eq!(
        data.cost_matrix().get_cost(0, 0),
        Err(ApspError::IndexOutOfRange {
            index: 0,
            num_nodes: 0
        })
    );
    assert!(data.parent_matrix().get_parent(0, 0).is_err());
    assert!(data.parent_matrix().reconstruct_path(0, 0).is_err());
    assert_eq!(data.cost_matrix().to_string(), "");
}

#[test]
fn self_loops_never_reach_the_output() {
    let mut m = AdjacencyMatrix::new(2).unwrap();
    m.set_cost(0, 0, 1.5).unwrap();
    m.set_cost(1, 1, -9.6).unwrap();
    let data = FloydWarshall::new().compute(&m);
    assert_eq!(data.cost(0, 0).unwrap(), 0.0);
    assert_eq!(data.cost(1, 1).unwrap(), 0.0);
    assert_eq!(data.parent_matrix().get_parent(0, 0).unwrap(), None);
    assert_eq!(data.parent_matrix().get_parent(1, 1).unwrap(), None);
    assert!(!data.has_negative_cycle());
}

#[test]
fn single_node_graph() {
    let data = FloydWarshall::new().compute(&AdjacencyMatrix::new(1).unwrap());
    assert_eq!(data.cost(0, 0).unwrap(), 0.0);
    assert_eq!(data.path(0, 0).unwrap(), vec![0]);
    assert!(data.cost(0, 1).is_err());
}

#[test]
fn input_is_left_untouched() {
    let m = AdjacencyMatrix::from_arcs(3, [(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
    let before = m.clone();
    let _ = FloydWarshall::new().compute(&m);
    assert_eq!(m, before);
    assert_eq!(m.get_cost(0, 2).unwrap(), f64::INFINITY);
}

#[test]
fn shared_input_across_threads() {
    let m = AdjacencyMatrix::from_arcs(4, [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)])
        .unwrap();
    let reference = FloydWarshall::new().compute(&m);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| FloydWarshall::new().compute(&m)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}

#[test]
fn negative_infinite_arc_never_reaches_the_engine() {
    let mut m = AdjacencyMatrix::from_arcs(3, [(1, 2, 1.0)]).unwrap();
    assert!(matches!(
        m.set_cost(0, 1, f64::NEG_INFINITY),
        Err(ApspError::InvalidArgument(_))
    ));
    let data = FloydWarshall::new().compute(&m);
    assert!(!data.has_negative_cycle());
    assert!(data.path(0, 2).unwrap().is_empty());
    assert_eq!(data.path(1, 2).unwrap(), vec![1, 2]);
}

#[test]
fn parts_match_the_accessors() {
    let m = AdjacencyMatrix::from_arcs(3, [(0, 1, 2.0), (1, 2, -1.0)]).unwrap();
    let data = FloydWarshall::new().compute(&m);
    let expected_costs = data.cost_matrix().clone();
    let expected_parents = data.parent_matrix().clone();
    let (costs, parents, flagged) = data.into_parts();
    assert_eq!(costs, expected_costs);
    assert_eq!(parents, expected_parents);
    assert!(!flagged);
    assert_eq!(costs.get_cost(0, 2).unwrap(), 1.0);
    assert_eq!(parents.reconstruct_path(0, 2).unwrap(), vec![0, 1, 2]);
}
