//! End-to-end queries through `Session`, covering both selection policies.

use cycle_core::test_fixtures::{
    dangling_graph, example_graph, graph_from, shortcut_graph, square_graph, two_cycle_graph,
};
use cycle_core::{render_path, GraphBuilder, GraphError, PathError, Selection, Session};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn default_example_returns_short_side() {
    init_tracing();
    let session = Session::example().unwrap();
    assert_eq!(session.minimum_stop_path_string(), "[A, C, B]");
}

#[test]
fn example_graph_fixture_matches_builder() {
    let session = Session::example().unwrap();
    assert_eq!(session.graph(), &example_graph());
}

#[test]
fn repeated_queries_are_identical() {
    let session = Session::new(shortcut_graph(), "S", "E").unwrap();
    let first = session.minimum_stop_path_string();
    let second = session.minimum_stop_path_string();
    assert_eq!(first, second);
    assert_eq!(session.minimum_stop_path(), session.minimum_stop_path());
}

#[test]
fn single_node_graph_returns_start() {
    // Neighbors are never looked at for a one-node graph.
    let graph = graph_from(&[("A", ["X", "Y"])]);
    for selection in [Selection::Capacity, Selection::Trimmed] {
        let session = Session::new(graph.clone(), "A", "A")
            .unwrap()
            .with_selection(selection);
        assert_eq!(session.minimum_stop_path_string(), "[A]");
    }
}

#[test]
fn two_cycle_returns_both_endpoints() {
    for selection in [Selection::Capacity, Selection::Trimmed] {
        let session = Session::new(two_cycle_graph(), "A", "B")
            .unwrap()
            .with_selection(selection);
        assert_eq!(session.minimum_stop_path_string(), "[A, B]");
    }
}

#[test]
fn capacity_tie_keeps_first_direction() {
    let session = Session::example()
        .unwrap()
        .with_selection(Selection::Capacity);
    assert_eq!(session.minimum_stop_path_string(), "[A, C, B]");

    let session = Session::new(square_graph(), "A", "C")
        .unwrap()
        .with_selection(Selection::Capacity);
    assert_eq!(session.minimum_stop_path_string(), "[A, B, C]");
}

#[test]
fn trimmed_tie_keeps_first_direction() {
    let session = Session::new(square_graph(), "A", "C").unwrap();
    assert_eq!(session.minimum_stop_path_string(), "[A, B, C]");
}

#[test]
fn capacity_selection_ignores_earlier_arrival() {
    let session = Session::new(shortcut_graph(), "S", "E")
        .unwrap()
        .with_selection(Selection::Capacity);
    assert_eq!(session.minimum_stop_path_string(), "[S, X, P, E, ]");
}

#[test]
fn trimmed_selection_prefers_earlier_arrival() {
    let session = Session::new(shortcut_graph(), "S", "E").unwrap();
    let path = session.minimum_stop_path().unwrap();
    assert!(path.is_complete());
    assert_eq!(path.to_string(), "[S, Y, E]");
}

#[test]
fn unreachable_end_under_capacity_renders_unset_slots() {
    let session = Session::new(dangling_graph(), "A", "E")
        .unwrap()
        .with_selection(Selection::Capacity);
    assert_eq!(session.minimum_stop_path_string(), "[A, Z, ]");
}

#[test]
fn unreachable_end_under_trimmed_is_not_found() {
    init_tracing();
    let session = Session::new(dangling_graph(), "A", "E").unwrap();
    let err = session.minimum_stop_path().unwrap_err();
    let PathError::NotFound {
        start,
        end,
        capacity,
    } = err;
    assert_eq!((start.as_str(), end.as_str(), capacity), ("A", "E", 3));
    assert_eq!(session.minimum_stop_path_string(), "null");
}

#[test]
fn disjoint_cycles_are_not_found() {
    let session = Session::new(shortcut_graph(), "S", "U").unwrap();
    assert!(matches!(
        session.minimum_stop_path(),
        Err(PathError::NotFound { .. })
    ));
}

#[test]
fn malformed_sessions_are_invalid_argument() {
    let cases = [
        Session::new(graph_from(&[]), "A", "A"),
        Session::new(example_graph(), "", "B"),
        Session::new(example_graph(), "A", ""),
        Session::new(example_graph(), "Q", "B"),
        Session::new(example_graph(), "A", "Q"),
    ];
    for case in cases {
        assert!(matches!(case, Err(GraphError::InvalidArgument(_))));
    }
}

#[test]
fn malformed_neighbor_pairs_are_invalid_argument() {
    let mut builder = GraphBuilder::new();
    let bad: [(&str, &[&str]); 6] = [
        ("", &["B", "C"]),
        ("A", &[]),
        ("A", &["B"]),
        ("A", &["", "C"]),
        ("A", &["C", "C"]),
        ("A", &["A", "C"]),
    ];
    for (label, neighbors) in bad {
        let err = builder.add_node(label, neighbors).unwrap_err();
        assert!(matches!(err, GraphError::InvalidArgument(_)), "{label:?}");
    }
    assert!(builder.build().is_empty());
}

#[test]
fn render_path_formats() {
    assert_eq!(render_path(None), "null");
    assert_eq!(render_path(Some(&cycle_core::Path::default())), "[]");
}
