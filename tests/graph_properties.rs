//! Behavioral properties of the built graph and its queries
//!
//! Each test exercises the public API only, against the fixtures in
//! `common`: build, rank, search, expand neighbors.

mod common;

use common::{build, goal_scenario, ids, workspace};
use paralink::stats::{self, degree, top_connected};
use paralink::{
    build_graph, EdgeKind, GraphSnapshot, GraphStats, KindFilter, NodeId, NodeKind,
    ParalinkError, SourceCollections,
};
use serde_json::json;

#[test]
fn goal_scenario_counts_and_degrees() {
    let snapshot = build(&goal_scenario());

    assert_eq!(snapshot.node_count(), 5);
    assert_eq!(snapshot.edge_count(), 4);
    assert_eq!(degree(&snapshot, &"G".into()), 2);
    assert_eq!(degree(&snapshot, &"P1".into()), 2);
    assert_eq!(degree(&snapshot, &"P2".into()), 0);

    let goal_edges: Vec<_> = snapshot.outgoing(&"G".into()).collect();
    assert!(goal_edges
        .iter()
        .all(|e| e.relation == EdgeKind::GoalProject && e.weight == 2));
}

#[test]
fn goal_scenario_tie_goes_to_project_built_first() {
    // Projects are ingested before goals, so P1 precedes G in build order
    let snapshot = build(&goal_scenario());
    let top = top_connected(&snapshot, 1);
    assert_eq!(ids(top), vec!["P1"]);

    let top = top_connected(&snapshot, 2);
    assert_eq!(ids(top), vec!["P1", "G"]);
}

#[test]
fn top_k_is_stable_for_equal_degrees() {
    let input = SourceCollections::new().with(
        NodeKind::Person,
        vec![
            json!({"id": "A", "projects": ["x", "y", "z"]}),
            json!({"id": "B", "tasks": ["x", "y", "z"]}),
            json!({"id": "C", "notes": ["x"]}),
        ],
    );
    let snapshot = build_graph(&input);
    assert_eq!(ids(top_connected(&snapshot, 2)), vec!["A", "B"]);
}

#[test]
fn degree_equals_reference_count_for_every_node() {
    let snapshot = build(&workspace());
    for node in snapshot.nodes() {
        assert_eq!(degree(&snapshot, &node.id), node.reference_ids.len());
    }
}

#[test]
fn every_reference_is_one_edge() {
    let snapshot = build(&workspace());
    for node in snapshot.nodes() {
        for (position, target) in node.reference_ids.iter().enumerate() {
            let matching = snapshot
                .outgoing(&node.id)
                .enumerate()
                .filter(|(i, e)| *i == position && &e.to == target)
                .count();
            assert_eq!(matching, 1, "{} → {} at {}", node.id, target, position);
        }
    }
}

#[test]
fn determinism_across_builds() {
    let first = build(&workspace());
    let second = build(&workspace());
    assert_eq!(
        serde_json::to_vec(first.nodes()).unwrap(),
        serde_json::to_vec(second.nodes()).unwrap()
    );
    assert_eq!(
        serde_json::to_vec(first.edges()).unwrap(),
        serde_json::to_vec(second.edges()).unwrap()
    );
}

#[test]
fn dangling_reference_is_dropped_from_neighbors() {
    let input = SourceCollections::new()
        .with(
            NodeKind::Project,
            vec![json!({"id": "A", "tasks": ["t1", "ghost", "t2"]})],
        )
        .with(
            NodeKind::Task,
            vec![json!({"id": "t1", "title": "one"}), json!({"id": "t2", "title": "two"})],
        );
    let snapshot = build_graph(&input);
    let neighbors = snapshot.neighbors(&"A".into(), 5);

    assert_eq!(ids(neighbors.nodes.clone()), vec!["t1", "t2"]);
    assert_eq!(neighbors.dangling, 1);
    // the edge itself is kept
    assert_eq!(snapshot.edge_count(), 3);
    assert_eq!(stats::dangling_references(&snapshot), 1);
}

#[test]
fn workspace_dangling_note_is_counted() {
    let snapshot = build(&workspace());
    let stats = GraphStats::compute(&snapshot, 3);
    assert_eq!(stats.dangling_references, 1);

    let book = snapshot.neighbors(&"proj-book".into(), 5);
    assert_eq!(ids(book.nodes.clone()), vec!["task-outline", "note-ideas"]);
    assert_eq!(book.dangling, 1);
}

#[test]
fn search_matches_kind_and_case() {
    let snapshot = build(&workspace());

    let projects = snapshot.search("proj", KindFilter::Only(NodeKind::Project));
    assert!(projects.is_empty());

    let all = snapshot.search("PROJ", KindFilter::Any);
    assert_eq!(ids(all), vec!["habit-old"]);

    let home = snapshot.search("home", "projects".parse().unwrap());
    assert_eq!(ids(home), vec!["proj-home"]);

    let rooms = snapshot.search("o", KindFilter::Only(NodeKind::Task));
    assert_eq!(
        ids(rooms),
        vec!["task-paint", "task-floor", "task-quote", "task-outline"]
    );
}

#[test]
fn search_for_proj_in_project_titles() {
    let input = SourceCollections::new()
        .with(
            NodeKind::Project,
            vec![
                json!({"id": "p1", "title": "Project Alpha"}),
                json!({"id": "p2", "title": "Garden"}),
                json!({"id": "p3", "title": "side-proj"}),
            ],
        )
        .with(NodeKind::Task, vec![json!({"id": "t1", "title": "Project kickoff"})]);
    let snapshot = build_graph(&input);
    let hits = snapshot.search("proj", KindFilter::Only(NodeKind::Project));
    assert_eq!(ids(hits), vec!["p1", "p3"]);
}

#[test]
fn invalid_kind_filter_is_rejected_at_the_boundary() {
    let err = "areas".parse::<KindFilter>().unwrap_err();
    assert!(matches!(err, ParalinkError::UnknownKind(_)));
}

#[test]
fn queries_against_empty_snapshot_return_nothing() {
    let snapshot = GraphSnapshot::empty();
    assert!(snapshot.search("", KindFilter::Any).is_empty());
    assert!(snapshot.neighbors(&"x".into(), 5).is_empty());
    assert!(snapshot.get(&NodeId::from("x")).is_none());
}

#[test]
fn embedded_references_resolve_like_ids() {
    let snapshot = build(&workspace());
    let quote = snapshot.get(&"task-quote".into()).unwrap();
    assert_eq!(quote.reference_ids, vec![NodeId::from("proj-home")]);
    assert_eq!(quote.payload["project"]["id"], "proj-home");
}

#[test]
fn in_degree_is_reported_separately() {
    let snapshot = build(&workspace());
    let table = stats::degree_table(&snapshot);
    let home = table.iter().find(|row| row.id.as_str() == "proj-home").unwrap();

    assert_eq!(home.out_degree, 5);
    // four tasks/notes, sam and the goal point back at it
    assert_eq!(home.in_degree, 6);
    assert_eq!(stats::in_degree(&snapshot, &"proj-home".into()), 6);
}

#[test]
fn counts_by_kind_cover_every_kind() {
    let stats = GraphStats::compute(&build(&workspace()), 3);
    assert_eq!(stats.counts_by_kind[&NodeKind::Project], 3);
    assert_eq!(stats.counts_by_kind[&NodeKind::Task], 4);
    assert_eq!(stats.counts_by_kind[&NodeKind::Note], 2);
    assert_eq!(stats.counts_by_kind[&NodeKind::Person], 1);
    assert_eq!(stats.counts_by_kind[&NodeKind::Goal], 1);
    assert_eq!(stats.counts_by_kind[&NodeKind::Habit], 2);
    assert_eq!(stats.total_nodes, 13);
}
